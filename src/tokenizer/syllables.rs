// WHY: English syllable counting without a pronunciation dictionary
// Counts vowel groups with a silent-e adjustment; approximate by nature

/// Syllable estimate for a single word, never less than one
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if letters.is_empty() {
        return 1;
    }

    let mut count = 0;
    let mut prev_vowel = false;
    for &ch in &letters {
        let vowel = is_vowel(ch);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if count > 1 && ends_with_silent_e(&letters) {
        count -= 1;
    }

    count.max(1)
}

fn ends_with_silent_e(letters: &[char]) -> bool {
    let n = letters.len();
    if n < 2 || letters[n - 1] != 'e' {
        return false;
    }
    // consonant + "le" is voiced: "ta-ble", "lit-tle"
    let consonant_le = n >= 3 && letters[n - 2] == 'l' && !is_vowel(letters[n - 3]);
    !consonant_le
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
