mod utils;

const CASES: &[(&str, &str)] = &[
    (r"\d+", "abc123def"),
    (r"foo", "foobar"),
    (r"bar", "foobar"),
    (r"baz", "foobar"),
    (r"(\w+)-(\d+)", "test-42 and then run-7"),
    (r"(\d+)?", ""),
    (r"[a-z]{3}", "xyz"),
    (r"invalid[", "anything"),
    (r"(", "anything"),
    (r"a{2,1}", "aa"),
    (r"\d+=\d+", "124221=12323=2=abd"),
    (r"text", "I love text. Text text text text text."),
    (r"[A-z]{3}", "The big red cat ate the fat rat."),
    (r"\sand", "bread and butter and jam and"),
    (r",", ",a,,b,"),
    (r"a|ab", "abab"),
    (r"(a)|(b)", "xaybz"),
    (r"\bcat\b", "concat cat catalog cat"),
    (r"é+", "caféé au lait"),
    (
        r"Sherlock Holmes|Shrelock Holm|John Watson|Irene Adler|Inspector Lestrade|Professor Moriarty",
        "Professor Moriarty
        Sherlock Holmes
        John Watson
        Irene Adler
        ",
    ),
    (
        r".*d",
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaad",
    ),
    (r"x*", "axb"),
    (r"^$", ""),
    (r"(?P<word>\w+)", "hello world"),
];

#[test]
fn test_many() {
    for (pattern, input) in CASES {
        utils::check_against_rust_regex(pattern, input);
    }
}
