use regsub::{substitute_one, Error, Flags, Pattern};

fn replace(pattern: &str, subject: &str, template: &str) -> Option<String> {
    Pattern::new(pattern).unwrap().replace(subject, template).unwrap()
}

#[test]
fn swaps_groups() {
    assert_eq!(
        replace("([a-z]+)-([0-9]+)", "item-42", r"\2:\1").as_deref(),
        Some("42:item")
    );
    assert_eq!(
        replace("([a-z]+)-([0-9]+)", "see item-42 now", r"<\1 \2>").as_deref(),
        Some("see <item 42> now")
    );
}

#[test]
fn missing_backreference_rejects_the_whole_rewrite() {
    let re = Pattern::new("(a)(b)").unwrap();
    assert!(matches!(re.replace("ab", r"\1"), Err(Error::MissingBackreference(2))));
    assert!(matches!(re.replace("ab", r"\2"), Err(Error::MissingBackreference(1))));
    assert!(matches!(re.replace_all("abab", r"\1"), Err(Error::MissingBackreference(2))));
}

#[test]
fn unbalanced_pattern_cannot_replace() {
    let re = Pattern::new(r"\(a").unwrap();
    assert!(matches!(re.replace("(a", "x"), Err(Error::Unbalanced)));
}

#[test]
fn no_match() {
    assert_eq!(replace("[0-9]+", "abc", "x"), None);
    assert_eq!(Pattern::new("z").unwrap().replace_all("abc", "x").unwrap(), None);
}

#[test]
fn without_groups_the_template_is_literal() {
    assert_eq!(replace("[0-9]+", "a1b", r"<\1>").as_deref(), Some(r"a<\1>b"));
}

#[test]
fn nested_groups_use_the_leaf_count() {
    // Two backreferences suffice for three real groups; they refer to the
    // first two groups the engine reports.
    assert_eq!(replace("((a)(b))", "xaby", r"\2\1").as_deref(), Some("xaaby"));
}

#[test]
fn repeated_index_substitutes_first_token_only() {
    assert_eq!(replace("(a)", "a", r"\1\1").as_deref(), Some(r"a\1"));
}

#[test]
fn captured_text_is_not_rescanned() {
    assert_eq!(
        replace("([^-]*)-([^-]*)", r"\2-x", r"\1|\2").as_deref(),
        Some(r"\2|x")
    );
}

#[test]
fn multi_digit_indices() {
    let pattern = "(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)(k)(l)";
    let template = r"\12\11\10\9\8\7\6\5\4\3\2\1";
    assert_eq!(replace(pattern, "abcdefghijkl", template).as_deref(), Some("lkjihgfedcba"));
}

#[test]
fn unset_groups_substitute_nothing() {
    assert_eq!(replace("(a)|(b)", "b", r"[\1][\2]").as_deref(), Some("[][b]"));
    let re = Pattern::with_flags("(a)", Flags::EXTENDED | Flags::NOSUB).unwrap();
    assert_eq!(re.replace("xa", r"[\1]").unwrap().as_deref(), Some("x[]"));
}

#[test]
fn replace_all_and_replacen() {
    let re = Pattern::new("([0-9]+)").unwrap();
    assert_eq!(re.replace_all("a1b22c333", r"<\1>").unwrap().as_deref(), Some("a<1>b<22>c<333>"));
    assert_eq!(re.replacen("a1b22c333", r"<\1>", 2).unwrap().as_deref(), Some("a<1>b<22>c333"));
    assert_eq!(re.replacen("a1b22c333", r"<\1>", 0).unwrap().as_deref(), Some("a<1>b<22>c<333>"));
    assert_eq!(re.replace("a1b22c333", r"<\1>").unwrap().as_deref(), Some("a<1>b22c333"));
}

#[test]
fn replace_all_with_empty_matches() {
    let re = Pattern::new("x*").unwrap();
    assert_eq!(re.replace_all("abc", "-").unwrap().as_deref(), Some("-a-b-c-"));
    assert_eq!(re.replace_all("axxb", "-").unwrap().as_deref(), Some("-a-b-"));
}

#[test]
fn basic_syntax_rewrite() {
    let re = Pattern::with_flags(r"\([a-z]*\)=\([0-9]*\)", Flags::empty()).unwrap();
    assert_eq!(re.replace("k=1", r"\2=\1").unwrap().as_deref(), Some("1=k"));
}

#[test]
fn substitute_single_match() {
    let re = Pattern::new("([a-z]+)@([a-z]+)").unwrap();
    let subject = "mail bob@host today";
    let m = re.find(subject).unwrap();
    assert_eq!(substitute_one(subject, &m, r"\2!\1", 2).unwrap(), "mail host!bob today");
    assert!(matches!(
        substitute_one(subject, &m, r"\2", 2),
        Err(Error::MissingBackreference(1))
    ));
    assert_eq!(substitute_one(subject, &m, "X", 0).unwrap(), "mail X today");
}

#[test]
fn substitute_rejects_a_foreign_subject() {
    let re = Pattern::new("(b)").unwrap();
    let m = re.find("aaaaab").unwrap();
    assert!(matches!(
        substitute_one("b", &m, r"\1", 1),
        Err(Error::SpanOutOfRange { len: 1, .. })
    ));
    assert!(matches!(
        substitute_one("éa", &re.find("abbb").unwrap(), r"\1", 1),
        Err(Error::SpanOutOfRange { .. })
    ));
}
