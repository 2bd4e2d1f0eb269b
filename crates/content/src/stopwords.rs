//! English stop-word list for the content vectorizer.
//!
//! Common function words carry no content signal and would dominate
//! term frequencies, so they are dropped before any counting. The
//! list is sorted so membership checks can binary-search.

/// Sorted list of English stop words.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always",
    "am", "among", "an", "and", "another", "any", "anybody", "anyone",
    "anything", "anywhere", "are", "area", "around", "as", "at", "back",
    "be", "became", "because", "become", "becomes", "been", "before",
    "behind", "being", "best", "better", "between", "beyond", "both",
    "but", "by", "came", "can", "cannot", "case", "cases", "certain",
    "certainly", "clear", "clearly", "come", "could", "did", "differ",
    "different", "do", "does", "done", "down", "downed", "during", "each",
    "early", "either", "end", "ended", "enough", "even", "evenly", "ever",
    "every", "everybody", "everyone", "everything", "everywhere", "far",
    "felt", "few", "find", "finds", "first", "for", "four", "from", "full",
    "fully", "further", "furthered", "gave", "general", "generally",
    "get", "gets", "give", "given", "gives", "go", "going", "good", "got",
    "great", "greater", "greatest", "had", "has", "have", "having", "he",
    "her", "here", "herself", "high", "higher", "highest", "him", "himself",
    "his", "how", "however", "i", "if", "important", "in", "interest",
    "into", "is", "it", "its", "itself", "just", "keep", "keeps", "kind",
    "knew", "know", "known", "knows", "large", "largely", "last", "later",
    "latest", "least", "less", "let", "lets", "like", "likely", "long",
    "longer", "made", "make", "making", "man", "many", "may", "me", "men",
    "might", "more", "most", "mostly", "mr", "mrs", "much", "must", "my",
    "myself", "necessary", "need", "needed", "needs", "never", "new",
    "newer", "newest", "next", "no", "nobody", "non", "not", "nothing",
    "now", "nowhere", "number", "of", "off", "often", "old", "older",
    "oldest", "on", "once", "one", "only", "open", "or", "other", "others",
    "our", "out", "over", "part", "parted", "parts", "per", "perhaps",
    "place", "places", "point", "pointed", "points", "possible", "present",
    "presented", "presents", "problem", "problems", "put", "puts", "quite",
    "rather", "really", "right", "room", "said", "same", "saw", "say",
    "says", "second", "seconds", "see", "seem", "seemed", "seeming",
    "seems", "several", "shall", "she", "should", "show", "showed", "showing",
    "shows", "side", "sides", "since", "small", "smaller", "so", "some",
    "somebody", "someone", "something", "somewhere", "state", "states",
    "still", "such", "sure", "take", "taken", "than", "that", "the",
    "their", "them", "then", "there", "therefore", "these", "they", "thing",
    "things", "think", "thinks", "this", "those", "though", "thought",
    "thoughts", "three", "through", "thus", "to", "today", "together",
    "too", "took", "toward", "turn", "turned", "two", "under", "until",
    "up", "upon", "us", "use", "used", "uses", "very", "want", "wanted",
    "wants", "was", "way", "ways", "we", "well", "went", "were", "what",
    "when", "where", "whether", "which", "while", "who", "whole", "whose",
    "why", "will", "with", "within", "without", "work", "worked", "working",
    "would", "year", "years", "yet", "you", "young", "your", "yours",
];

/// True when `word` is a stop word. Expects an already-lowercased token.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}
