//! Porter suffix-stripping stemmer (M.F. Porter, 1980).
//!
//! Operates on lower-case input. Words of one or two characters are returned
//! unchanged. Non-alphabetic characters are treated as consonants.

const STEP2: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

fn is_consonant(w: &[char], i: usize) -> bool {
    match w[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(w, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences, the `m` in `[C](VC)^m[V]`.
fn measure(w: &[char]) -> usize {
    let n = w.len();
    let mut i = 0;
    while i < n && is_consonant(w, i) {
        i += 1;
    }
    let mut m = 0;
    loop {
        while i < n && !is_consonant(w, i) {
            i += 1;
        }
        if i >= n {
            return m;
        }
        while i < n && is_consonant(w, i) {
            i += 1;
        }
        m += 1;
    }
}

fn contains_vowel(w: &[char]) -> bool {
    (0..w.len()).any(|i| !is_consonant(w, i))
}

fn ends_double_consonant(w: &[char]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && is_consonant(w, n - 1)
}

/// consonant-vowel-consonant ending, last consonant not w, x or y
fn ends_cvc(w: &[char]) -> bool {
    let n = w.len();
    n >= 3
        && is_consonant(w, n - 1)
        && !is_consonant(w, n - 2)
        && is_consonant(w, n - 3)
        && !matches!(w[n - 1], 'w' | 'x' | 'y')
}

fn ends_with(w: &[char], suffix: &str) -> bool {
    let len = suffix.chars().count();
    w.len() >= len && w[w.len() - len..].iter().copied().eq(suffix.chars())
}

fn replace_suffix(w: &mut Vec<char>, suffix: &str, replacement: &str) {
    let len = suffix.chars().count();
    w.truncate(w.len() - len);
    w.extend(replacement.chars());
}

fn step1a(w: &mut Vec<char>) {
    if ends_with(w, "sses") || ends_with(w, "ies") {
        w.truncate(w.len() - 2);
    } else if !ends_with(w, "ss") && ends_with(w, "s") {
        w.pop();
    }
}

fn step1b(w: &mut Vec<char>) {
    if ends_with(w, "eed") {
        if measure(&w[..w.len() - 3]) > 0 {
            w.pop();
        }
        return;
    }

    let mut removed = false;
    for suffix in ["ed", "ing"] {
        if ends_with(w, suffix) {
            let stem_len = w.len() - suffix.len();
            if contains_vowel(&w[..stem_len]) {
                w.truncate(stem_len);
                removed = true;
            }
            break;
        }
    }
    if !removed {
        return;
    }

    if ends_with(w, "at") || ends_with(w, "bl") || ends_with(w, "iz") {
        w.push('e');
    } else if ends_double_consonant(w) && !matches!(w[w.len() - 1], 'l' | 's' | 'z') {
        w.pop();
    } else if measure(w) == 1 && ends_cvc(w) {
        w.push('e');
    }
}

fn step1c(w: &mut [char]) {
    let n = w.len();
    if n > 1 && w[n - 1] == 'y' && contains_vowel(&w[..n - 1]) {
        w[n - 1] = 'i';
    }
}

/// First matching suffix wins; it is replaced only if the remaining stem
/// measures above `min_measure`.
fn replace_rules(w: &mut Vec<char>, rules: &[(&str, &str)], min_measure: usize) {
    let word: &[char] = w;
    let Some(&(suffix, replacement)) = rules.iter().find(|(suffix, _)| ends_with(word, suffix)) else {
        return;
    };
    let stem_len = w.len() - suffix.len();
    if measure(&w[..stem_len]) > min_measure {
        replace_suffix(w, suffix, replacement);
    }
}

fn step4(w: &mut Vec<char>) {
    let word: &[char] = w;
    let matched = STEP4.iter().copied().find(|&suffix| {
        if !ends_with(word, suffix) {
            return false;
        }
        if suffix == "ion" {
            let stem_len = word.len() - 3;
            return stem_len > 0 && matches!(word[stem_len - 1], 's' | 't');
        }
        true
    });
    if let Some(suffix) = matched {
        let stem_len = w.len() - suffix.len();
        if measure(&w[..stem_len]) > 1 {
            w.truncate(stem_len);
        }
    }
}

fn step5(w: &mut Vec<char>) {
    if ends_with(w, "e") {
        let stem = &w[..w.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            w.pop();
        }
    }
    if ends_with(w, "l") && ends_double_consonant(w) && measure(w) > 1 {
        w.pop();
    }
}

/// Reduce a lower-case word to its Porter stem.
pub fn stem(word: &str) -> String {
    let mut w: Vec<char> = word.chars().collect();
    if w.len() <= 2 {
        return word.to_string();
    }

    step1a(&mut w);
    step1b(&mut w);
    step1c(&mut w);
    replace_rules(&mut w, STEP2, 0);
    replace_rules(&mut w, STEP3, 0);
    step4(&mut w);
    step5(&mut w);

    w.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::stem;

    fn assert_stems(pairs: &[(&str, &str)]) {
        for (word, expected) in pairs {
            assert_eq!(stem(word), *expected, "stem({})", word);
        }
    }

    #[test]
    fn test_plurals_and_participles() {
        assert_stems(&[
            ("caresses", "caress"),
            ("ponies", "poni"),
            ("caress", "caress"),
            ("cats", "cat"),
            ("feed", "feed"),
            ("agreed", "agre"),
            ("plastered", "plaster"),
            ("bled", "bled"),
            ("motoring", "motor"),
            ("sing", "sing"),
            ("conflated", "conflat"),
            ("troubled", "troubl"),
            ("sized", "size"),
            ("hopping", "hop"),
            ("falling", "fall"),
            ("hissing", "hiss"),
            ("filing", "file"),
            ("running", "run"),
        ]);
    }

    #[test]
    fn test_y_to_i() {
        assert_stems(&[("happy", "happi"), ("sky", "sky")]);
    }

    #[test]
    fn test_derivational_suffixes() {
        assert_stems(&[
            ("relational", "relat"),
            ("conditional", "condit"),
            ("hopeful", "hope"),
            ("goodness", "good"),
            ("adjustment", "adjust"),
            ("adoption", "adopt"),
            ("generalization", "gener"),
        ]);
    }

    #[test]
    fn test_short_words_untouched() {
        assert_stems(&[("is", "is"), ("a", "a"), ("", "")]);
    }

    #[test]
    fn test_punctuation_is_kept() {
        assert_eq!(stem("marines,"), "marines,");
        assert_eq!(stem("pandora."), "pandora.");
    }
}
