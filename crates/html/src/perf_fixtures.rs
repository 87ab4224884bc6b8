pub const BLOCK_TEMPLATE: &str =
    r#"<div class="box"><div id="title">hello</div><div class="icon" /></div>"#;

pub fn make_blocks(blocks: usize) -> String {
    let mut html = String::with_capacity(BLOCK_TEMPLATE.len() * blocks);
    for _ in 0..blocks {
        html.push_str(BLOCK_TEMPLATE);
    }
    html
}

/// `depth` nested divs wrapped in one `<html>`, each holding a line of text.
pub fn make_nested(depth: usize) -> String {
    let mut html = String::with_capacity(depth * 24 + 16);
    html.push_str("<html>");
    for i in 0..depth {
        html.push_str("<div>");
        html.push_str(if i % 2 == 0 { "even" } else { "odd" });
    }
    for _ in 0..depth {
        html.push_str("</div>");
    }
    html.push_str("</html>");
    html
}
