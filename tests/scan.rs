use regsub::{Flags, Pattern};

fn texts<'s>(re: &Pattern, subject: &'s str) -> Vec<&'s str> {
    re.find_iter(subject).map(|m| m.as_str()).collect()
}

fn ranges(re: &Pattern, subject: &str) -> Vec<(usize, usize)> {
    re.find_iter(subject).map(|m| (m.start(), m.end())).collect()
}

#[test]
fn ordered_and_non_overlapping() {
    let re = Pattern::new("[0-9]+").unwrap();
    let all = re.match_all("12 and 34 and 56");
    let found: Vec<&str> = all.iter().map(|m| m.as_str()).collect();
    assert_eq!(found, vec!["12", "34", "56"]);
    for pair in all.windows(2) {
        assert!(pair[0].end() <= pair[1].start());
    }
    let positions: Vec<(usize, usize)> = all.iter().map(|m| (m.from(), m.to())).collect();
    assert_eq!(positions, vec![(1, 2), (8, 9), (15, 16)]);
}

#[test]
fn zero_width_matches_terminate() {
    let re = Pattern::new("a*").unwrap();
    let subject = "b".repeat(1000);
    let all = re.match_all(&subject);
    assert_eq!(all.len(), 1001);
    assert!(all.iter().all(|m| m.as_str().is_empty()));

    assert_eq!(ranges(&re, "baaa"), vec![(0, 0), (1, 4)]);
    assert_eq!(ranges(&re, "aaa"), vec![(0, 3)]);
    assert_eq!(ranges(&re, ""), vec![(0, 0)]);
}

#[test]
fn zero_width_steps_over_whole_characters() {
    let re = Pattern::new("x*").unwrap();
    assert_eq!(ranges(&re, "é"), vec![(0, 0), (2, 2)]);
    assert_eq!(ranges(&re, "axxbxc"), vec![(0, 0), (1, 3), (4, 5), (6, 6)]);
}

#[test]
fn later_windows_see_earlier_text() {
    let re = Pattern::new("^a").unwrap();
    assert_eq!(texts(&re, "aaa"), vec!["a"]);

    let re = Pattern::with_flags("^a", Flags::EXTENDED | Flags::NEWLINE).unwrap();
    assert_eq!(ranges(&re, "ab\nab\nb"), vec![(0, 1), (3, 4)]);

    let re = Pattern::new(r"\bfoo").unwrap();
    assert_eq!(ranges(&re, "foofoo foo"), vec![(0, 3), (7, 10)]);
}

#[test]
fn notbol_noteol_apply_to_the_whole_scan() {
    let re = Pattern::with_flags("^a|b$", Flags::EXTENDED | Flags::NOTBOL | Flags::NOTEOL).unwrap();
    assert!(re.match_all("ab").is_empty());
    let re = Pattern::with_flags("^a|b$", Flags::EXTENDED).unwrap();
    assert_eq!(texts(&re, "ab"), vec!["a", "b"]);
}

#[test]
fn each_scan_starts_over() {
    let re = Pattern::new("[a-z]").unwrap();
    let mut it = re.find_iter("ab");
    assert_eq!(it.subject(), "ab");
    assert_eq!(it.next().unwrap().as_str(), "a");
    assert_eq!(texts(it.pattern(), "xy"), vec!["x", "y"]);
    assert_eq!(it.next().unwrap().as_str(), "b");
    assert!(it.next().is_none());
    assert!(it.next().is_none());
}

#[test]
fn agrees_with_the_regex_crate() {
    let cases = [
        ("[0-9]+", "12 and 34 and 56"),
        ("[a-z]+", "The quick brown fox"),
        ("x*", "axxbxc"),
        ("a|ab", "abab"),
        ("(ab)+", "ababxab"),
        ("", "héllo"),
        ("[[:alpha:]]+", "ab1cd2"),
    ];
    for (pattern, subject) in cases {
        let ours = ranges(&Pattern::new(pattern).unwrap(), subject);
        let oracle: Vec<(usize, usize)> = regex::Regex::new(pattern)
            .unwrap()
            .find_iter(subject)
            .map(|m| (m.start(), m.end()))
            .collect();
        assert_eq!(ours, oracle, "{:?} against {:?}", pattern, subject);
    }
}
