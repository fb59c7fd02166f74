// WHY: word lists behind the detectors live in one place so configuration can extend them
// English-only defaults; thresholds and lists are starting points, not linguistic truth

use std::collections::{BTreeMap, HashSet};

/// Forms of "to be" that introduce passive constructions and telling states
pub const BE_FORMS: &[&str] = &["am", "is", "are", "was", "were", "be", "been", "being"];

/// Words ending in "-ly" that are not adverbs (or are too common to flag)
pub const ADVERB_STOPLIST: &[&str] = &[
    "ally", "anomaly", "apply", "assembly", "belly", "bully", "butterfly", "chilly",
    "comply", "costly", "curly", "daily", "deadly", "early", "elderly", "family",
    "fly", "folly", "friendly", "ghastly", "ghostly", "gully", "holy", "homily",
    "imply", "italy", "jelly", "jolly", "july", "likely", "lily", "lively", "lonely",
    "lovely", "manly", "melancholy", "monopoly", "multiply", "oily", "only",
    "orderly", "ply", "rally", "reply", "rely", "scholarly", "silly", "sly",
    "smelly", "steely", "sully", "supply", "tally", "ugly", "weekly", "wily",
    "woolly", "wrinkly", "yearly", "monthly", "nightly", "hourly", "holly",
];

/// Past participles that do not end in "-ed", including all "-en" forms
pub const IRREGULAR_PARTICIPLES: &[&str] = &[
    "born", "bought", "brought", "built", "caught", "cut", "dealt", "done", "drawn",
    "dug", "fed", "fought", "found", "held", "hung", "hurt", "kept", "known", "laid",
    "led", "left", "lent", "lost", "made", "meant", "met", "paid", "put", "read",
    "run", "said", "seen", "sent", "set", "shot", "shown", "shut", "sold", "sought",
    "spent", "spun", "struck", "stuck", "sung", "sunk", "swept", "sworn", "taught",
    "thrown", "told", "torn", "understood", "won", "worn", "wound", "wrung",
    "awoken", "beaten", "bitten", "blown", "broken", "chosen", "driven", "eaten",
    "fallen", "flown", "forbidden", "forgiven", "forgotten", "frozen", "given",
    "gotten", "grown", "hidden", "mistaken", "overtaken", "proven", "ridden",
    "risen", "sewn", "shaken", "sown", "spoken", "stolen", "stricken", "swollen",
    "taken", "trodden", "undertaken", "woken", "written",
];

/// Words ending in "-ed" that are not participles
pub const NON_PARTICIPLES: &[&str] = &[
    "bed", "creed", "deed", "feed", "greed", "hundred", "need", "red", "reed",
    "seed", "shed", "sled", "speed", "steed", "weed",
];

/// Verbs that state a perception or feeling instead of showing it
pub const TELLING_VERBS: &[&str] = &[
    "felt", "feel", "feels", "feeling", "seemed", "seem", "seems", "appeared",
    "realized", "realised", "knew", "wondered", "noticed", "decided", "believed",
    "sensed", "wished", "hoped",
];

/// Emotional states that "to be" turns into telling ("was sad")
pub const EMOTION_ADJECTIVES: &[&str] = &[
    "afraid", "angry", "annoyed", "anxious", "ashamed", "bored", "confused",
    "curious", "delighted", "depressed", "disappointed", "embarrassed", "excited",
    "frightened", "frustrated", "furious", "glad", "guilty", "happy", "hopeful",
    "jealous", "lonely", "nervous", "proud", "relieved", "sad", "scared",
    "shocked", "surprised", "terrified", "tired", "upset", "worried",
];

/// Intensifiers allowed between "to be" and an emotion ("was very sad")
pub const INTENSIFIERS: &[&str] = &["very", "so", "really", "extremely", "quite", "too", "incredibly"];

/// Subordinating conjunctions and relative pronouns that open a clause
pub const CLAUSE_MARKERS: &[&str] = &[
    "although", "because", "since", "unless", "whereas", "while", "which",
    "who", "whom", "whose", "though", "whenever", "wherever", "whether",
];

/// Wordy phrase and its concise replacement
pub const WORDY_PHRASES: &[(&str, &str)] = &[
    ("a large number of", "many"),
    ("absolutely essential", "essential"),
    ("at the present time", "now"),
    ("at this point in time", "now"),
    ("basic fundamentals", "fundamentals"),
    ("completely finished", "finished"),
    ("despite the fact that", "although"),
    ("due to the fact that", "because"),
    ("during the course of", "during"),
    ("each and every", "each"),
    ("end result", "result"),
    ("first and foremost", "first"),
    ("for the purpose of", "for"),
    ("has the ability to", "can"),
    ("in close proximity", "near"),
    ("in light of the fact that", "because"),
    ("in order to", "to"),
    ("in spite of the fact that", "although"),
    ("in the event that", "if"),
    ("in the near future", "soon"),
    ("is able to", "can"),
    ("on a daily basis", "daily"),
    ("past history", "history"),
    ("the reason why is that", "because"),
    ("until such time as", "until"),
    ("whether or not", "whether"),
    ("with regard to", "about"),
];

/// Lexicon instance: defaults merged with configured extensions
#[derive(Debug, Clone)]
pub struct Lexicon {
    adverb_stoplist: HashSet<String>,
    irregular_participles: HashSet<&'static str>,
    non_participles: HashSet<&'static str>,
    telling_verbs: HashSet<String>,
    emotion_adjectives: HashSet<&'static str>,
    intensifiers: HashSet<&'static str>,
    clause_markers: HashSet<&'static str>,
    be_forms: HashSet<&'static str>,
    wordy_phrases: BTreeMap<String, String>,
}

impl Lexicon {
    /// Build the lexicon from defaults plus extensions; extra entries are lowercased
    pub fn new(
        extra_adverb_stoplist: &[String],
        extra_telling_words: &[String],
        extra_wordy_phrases: &BTreeMap<String, String>,
    ) -> Self {
        let adverb_stoplist = ADVERB_STOPLIST
            .iter()
            .map(|w| w.to_string())
            .chain(extra_adverb_stoplist.iter().map(|w| w.to_lowercase()))
            .collect();
        let telling_verbs = TELLING_VERBS
            .iter()
            .map(|w| w.to_string())
            .chain(extra_telling_words.iter().map(|w| w.to_lowercase()))
            .collect();
        let wordy_phrases = WORDY_PHRASES
            .iter()
            .map(|(p, r)| (p.to_string(), r.to_string()))
            .chain(
                extra_wordy_phrases
                    .iter()
                    .map(|(p, r)| (p.to_lowercase(), r.clone())),
            )
            .collect();

        Self {
            adverb_stoplist,
            irregular_participles: IRREGULAR_PARTICIPLES.iter().copied().collect(),
            non_participles: NON_PARTICIPLES.iter().copied().collect(),
            telling_verbs,
            emotion_adjectives: EMOTION_ADJECTIVES.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
            clause_markers: CLAUSE_MARKERS.iter().copied().collect(),
            be_forms: BE_FORMS.iter().copied().collect(),
            wordy_phrases,
        }
    }

    pub fn is_adverb_stopword(&self, word: &str) -> bool {
        self.adverb_stoplist.contains(word)
    }

    pub fn is_be_form(&self, word: &str) -> bool {
        self.be_forms.contains(word)
    }

    /// Past participle check for a lowercase word
    pub fn is_past_participle(&self, word: &str) -> bool {
        if self.irregular_participles.contains(word) {
            return true;
        }
        if self.non_participles.contains(word) {
            return false;
        }
        // regular participles end in "-ed"; "-en" forms come only from the irregular list
        word.chars().count() >= 4 && word.ends_with("ed")
    }

    pub fn is_telling_verb(&self, word: &str) -> bool {
        self.telling_verbs.contains(word)
    }

    pub fn is_emotion(&self, word: &str) -> bool {
        self.emotion_adjectives.contains(word)
    }

    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.contains(word)
    }

    pub fn is_clause_marker(&self, word: &str) -> bool {
        self.clause_markers.contains(word)
    }

    pub fn wordy_phrases(&self) -> &BTreeMap<String, String> {
        &self.wordy_phrases
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(&[], &[], &BTreeMap::new())
    }
}
