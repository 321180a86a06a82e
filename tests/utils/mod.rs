use regex as rust_regex;
use repractice::Regex;

/// Compile a pattern with both this crate and rust-regex. Panics if only one
/// of them accepts it.
pub fn compile_both(pattern: &str) -> Option<(Regex, rust_regex::Regex)> {
    match (Regex::new(pattern), rust_regex::Regex::new(pattern)) {
        (Ok(ours), Ok(rust)) => Some((ours, rust)),
        (Err(_), Err(_)) => None,
        (Ok(_), Err(e)) => panic!("rust-regex failed to compile but we succeeded: {e}"),
        (Err(e), Ok(_)) => panic!("We failed to compile but rust-regex succeeded: {e}"),
    }
}

/// Match a pattern against a given input with both engines and compare the
/// results. Iteration is only compared when no empty match shows up, since
/// rust-regex drops an empty match right after a non-empty one and we don't.
pub fn check_against_rust_regex(pattern: &str, input: &str) {
    let Some((ours, rust_re)) = compile_both(pattern) else {
        return;
    };

    // find
    let rust_match = rust_re.find(input).map(|m| (m.start(), m.end()));
    let my_match = ours.find(input).map(|m| (m.start(), m.end()));
    assert_eq!(
        my_match, rust_match,
        "Mismatch for pattern {:?} input {:?} (find)",
        pattern, input
    );

    // find_captures
    if let (Some(rust_caps), Some(my_caps)) = (rust_re.captures(input), ours.find_captures(input)) {
        assert_eq!(
            my_caps.group_len(),
            rust_caps.len(),
            "Mismatch for pattern {:?} input {:?} (group count)",
            pattern, input
        );
    }
    let rust_groups = rust_re.captures(input).map(|caps| {
        caps.iter()
            .map(|m| m.map(|m| m.as_str()))
            .collect::<Vec<_>>()
    });
    let my_groups = ours.find_captures(input).map(|caps| {
        caps.iter()
            .map(|g| g.map(|g| g.as_str()))
            .collect::<Vec<_>>()
    });
    assert_eq!(
        my_groups, rust_groups,
        "Mismatch for pattern {:?} input {:?} (find_captures)",
        pattern, input
    );

    let my_all: Vec<_> = ours.find_all(input).map(|m| (m.start(), m.end())).collect();
    if my_all.iter().any(|(from, to)| from == to) {
        return;
    }

    // find_all
    let rust_all: Vec<_> = rust_re
        .find_iter(input)
        .map(|m| (m.start(), m.end()))
        .collect();
    assert_eq!(
        my_all, rust_all,
        "Mismatch for pattern {:?} input {:?} (find_all)",
        pattern, input
    );

    // find_all_captures
    let rust_all_caps: Vec<Vec<Option<&str>>> = rust_re
        .captures_iter(input)
        .map(|caps| caps.iter().map(|m| m.map(|m| m.as_str())).collect())
        .collect();
    let my_all_caps: Vec<Vec<Option<&str>>> = ours
        .find_all_captures(input)
        .map(|caps| caps.iter().map(|g| g.map(|g| g.as_str())).collect())
        .collect();
    assert_eq!(
        my_all_caps, rust_all_caps,
        "Mismatch for pattern {:?} input {:?} (find_all_captures)",
        pattern, input
    );

    // split
    let rust_split: Vec<_> = rust_re.split(input).collect();
    assert_eq!(
        ours.split_str(input),
        rust_split,
        "Mismatch for pattern {:?} input {:?} (split)",
        pattern, input
    );

    // splitn
    for limit in 0..4 {
        let rust_splitn: Vec<_> = rust_re.splitn(input, limit).collect();
        let my_splitn: Vec<_> = ours.splitn(input, limit).collect();
        assert_eq!(
            my_splitn, rust_splitn,
            "Mismatch for pattern {:?} input {:?} (splitn {})",
            pattern, input, limit
        );
    }
}
