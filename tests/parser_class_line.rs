use jdeps_puml::parsers::class_line::ClassLineParser;
use jdeps_puml::parsers::LineParser;

#[test]
fn class_line_parser_extracts_archive() {
    let parser = ClassLineParser::new();
    let edge = parser
        .parse_line("   com.foo.Alpha    -> com.bar.Beta     somejar.jar")
        .unwrap();
    assert_eq!(edge.from(), "com.foo.Alpha");
    assert_eq!(edge.to(), "com.bar.Beta");
    assert_eq!(edge.archive(), Some("somejar.jar"));
}

#[test]
fn class_line_parser_matches_anywhere_in_line() {
    let parser = ClassLineParser::new();
    let edge = parser
        .parse_line("prefix text  a.B -> c.D  lib/c.jar trailing")
        .unwrap();
    assert_eq!(edge.from(), "a.B");
    assert_eq!(edge.archive(), Some("lib/c.jar"));
}

#[test]
fn class_line_parser_skips_non_matching_lines() {
    let parser = ClassLineParser::new();
    for line in [
        "",
        "app.jar -> lib.jar",
        "   com.foo.A -> com.bar.B",
        "   com.foo.A -> com.bar.B   not found",
        "com.foo.A -> com.bar.B x.jar",
        "\u{1F600} ->-> ???",
    ] {
        assert!(parser.parse_line(line).is_none(), "unexpected match: {line:?}");
    }
    assert!(parser.parse_optional(None).is_none());
}

#[test]
fn class_line_parser_only_splits_on_ascii_whitespace() {
    let parser = ClassLineParser::new();
    let nbsp = "\u{a0}com.foo.A\u{a0}->\u{a0}com.bar.B\u{a0}x.jar";
    assert!(parser.parse_line(nbsp).is_none());

    let edge = parser
        .parse_line("\tcom.foo.A\u{a0}x -> com.bar.B\tx.jar")
        .unwrap();
    assert_eq!(edge.from(), "com.foo.A\u{a0}x");
}
