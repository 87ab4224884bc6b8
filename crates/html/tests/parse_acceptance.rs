use html::perf_fixtures::{make_blocks, make_nested};
use html::serialize::to_markup;
use html::traverse::{node_count, walk};
use html::{Node, ParseErrorCode, TagState, Tokenizer, TokenizerConfig, parse, tokenize};

fn tag_sequence(input: &str) -> Vec<(String, TagState)> {
    let config = TokenizerConfig::default();
    tokenize(input, &config)
        .expect("valid input")
        .into_iter()
        .map(|token| (token.name, token.state))
        .collect()
}

#[test]
fn node_count_is_pairs_plus_self_closed() {
    let input = r#"<html><div id="a">x<div/><div class="c">y</div></div><div /></html>"#;
    let tags = tag_sequence(input);
    let pairs = tags.iter().filter(|(_, state)| *state == TagState::Opened).count();
    let self_closed = tags
        .iter()
        .filter(|(_, state)| *state == TagState::SelfClosed)
        .count();
    let forest = parse(input).expect("valid");
    assert_eq!(node_count(&forest), pairs + self_closed);
    assert_eq!(node_count(&forest), 5);
}

#[test]
fn serialized_forest_reproduces_tag_sequence() {
    let input = "<html>\n<div class=\"a\">1<div/>2</div>\n<div>3</div>\n</html><div/>";
    let forest = parse(input).expect("valid");
    assert_eq!(tag_sequence(&to_markup(&forest)), tag_sequence(input));
}

#[test]
fn finished_trees_hold_no_opened_elements() {
    let forest = parse(&make_blocks(32)).expect("valid");
    assert!(walk(&forest).all(|visit| visit.node.state() != Some(TagState::Opened)));
}

#[test]
fn parsing_twice_yields_equal_forests() {
    let input = make_blocks(16);
    assert_eq!(parse(&input), parse(&input));
}

#[test]
fn block_fixture_shape() {
    let blocks = 100;
    let forest = parse(&make_blocks(blocks)).expect("valid");
    assert_eq!(forest.len(), blocks);
    assert_eq!(node_count(&forest), blocks * 3);
    let first = &forest[0];
    assert_eq!(first.attr("class"), Some("box"));
    assert_eq!(first.children()[0].children(), &[Node::text("hello")]);
    assert_eq!(first.children()[1].state(), Some(TagState::SelfClosed));
}

#[test]
fn nested_fixture_depth() {
    let depth = 2_000;
    let forest = parse(&make_nested(depth)).expect("valid");
    let deepest = walk(&forest).map(|visit| visit.depth).max();
    assert_eq!(deepest, Some(depth));
    assert_eq!(node_count(&forest), depth + 1);
}

#[test]
fn failed_parse_can_be_followed_by_a_good_one() {
    let err = parse("<div>").expect_err("unclosed");
    assert_eq!(err.code(), ParseErrorCode::UnclosedTag);
    assert!(parse("<div></div>").is_ok());
}

#[test]
fn tokenizer_cursor_stops_on_error() {
    let config = TokenizerConfig::default();
    let mut tokenizer = Tokenizer::new("<div>ok<span>", &config);
    let first = tokenizer.next_tag().expect("valid").expect("tag");
    assert_eq!(first.name, "div");
    assert_eq!(tokenizer.position(), 5);
    let err = tokenizer.next_tag().expect_err("unknown tag");
    assert_eq!(err.position, 7);
    assert_eq!(tokenizer.position(), 5);
    assert_eq!(tokenizer.remaining(), "ok<span>");
}

#[test]
fn error_messages_read_well() {
    let cases = [
        ("<div>ertet", "closing tag not found for <div> (at byte 0)"),
        ("</div>", "opened <div> tag was not found (at byte 0)"),
        (
            "<html><div></html>",
            "closing </html> tag found instead of </div> (at byte 11)",
        ),
        (
            r#"<html class="" />"#,
            "attribute \"class\" is not valid for <html> tag (at byte 0)",
        ),
        ("<span>", "tag <span> is not valid (at byte 0)"),
    ];
    for (input, message) in cases {
        let err = parse(input).expect_err(input);
        assert_eq!(err.to_string(), message, "{input}");
    }
}
