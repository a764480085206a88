//! CSS syntax ingestion using the `cssparser` crate.
//!
//! The parser extracts selectors, declarations, and comments without
//! interpreting property values. Values stay raw text; the lint rules only
//! reason about names, structure, and the `!important` flag.

use std::sync::LazyLock;

use cssparser::{ParseError as CssParseError, Parser, ParserInput, SourcePosition, Token};
use regex::Regex;

use crate::document::{Comment, CssRule, Declaration};
use crate::selector::{Combinator, PseudoClass, Selector, SelectorPart, TypeSelector};
use crate::{Error, Result};

static IMPORTANT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)!\s*important\s*$").unwrap());

/// Parse a CSS stylesheet string into a list of rules.
///
/// Rules inside `@media` and `@supports` blocks are flattened into the
/// result; other at-rules are skipped. Parse errors in individual rules do
/// not fail the whole parse: the bad rule is skipped with a warning and
/// parsing continues after its block.
pub fn parse_css(css: &str) -> Result<Vec<CssRule>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];
    let mut order = 0u32;

    parse_rule_list(&mut parser, &mut rules, &mut order);

    Ok(rules)
}

/// Scan block comments out of stylesheet text.
///
/// Comments are lexical surface for the banner checks. The scan runs over
/// the token stream rather than raw text so that comment-shaped character
/// sequences inside string values are not mistaken for comments.
pub fn scan_comments(css: &str) -> Vec<Comment> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut comments = vec![];

    collect_comments(&mut parser, &mut comments);

    comments
}

fn collect_comments(parser: &mut Parser<'_, '_>, out: &mut Vec<Comment>) {
    loop {
        let line = parser.current_source_location().line + 1;

        let token = match parser.next_including_whitespace_and_comments() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        match token {
            Token::Comment(text) => {
                out.push(Comment {
                    text: text.trim().to_string(),
                    line,
                });
            }
            Token::CurlyBracketBlock
            | Token::SquareBracketBlock
            | Token::ParenthesisBlock
            | Token::Function(_) => {
                let _ = parser.parse_nested_block(|block| {
                    collect_comments(block, out);
                    Ok::<_, CssParseError<'_, ()>>(())
                });
            }
            _ => {}
        }
    }
}

/// Parse a run of rules, recursing into grouping at-rules.
fn parse_rule_list(parser: &mut Parser<'_, '_>, rules: &mut Vec<CssRule>, order: &mut u32) {
    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let state = parser.state();
        let at_keyword = match parser.next() {
            Ok(Token::AtKeyword(name)) => Some(name.to_string()),
            Ok(_) => None,
            Err(_) => break,
        };

        match at_keyword {
            Some(name) => parse_at_rule(parser, &name, rules, order),
            None => {
                parser.reset(&state);
                match parse_rule(parser, *order) {
                    Ok(rule) => {
                        rules.push(rule);
                        *order += 1;
                    }
                    Err(e) => {
                        tracing::warn!("CSS parse error: {}", e);
                        // Recover by skipping to the next rule
                        skip_to_next_rule(parser);
                    }
                }
            }
        }
    }
}

/// Handle an at-rule whose `@name` token has already been consumed.
fn parse_at_rule(
    parser: &mut Parser<'_, '_>,
    name: &str,
    rules: &mut Vec<CssRule>,
    order: &mut u32,
) {
    match name.to_lowercase().as_str() {
        // Grouping at-rules: lint the nested rules as if top-level
        "media" | "supports" => {
            let prelude: std::result::Result<(), CssParseError<'_, ()>> = parser
                .parse_until_before(cssparser::Delimiter::CurlyBracketBlock, |p| {
                    while !p.is_exhausted() {
                        let _ = p.next();
                    }
                    Ok(())
                });
            if prelude.is_err() {
                skip_to_next_rule(parser);
                return;
            }

            match parser.next() {
                Ok(Token::CurlyBracketBlock) => {
                    let _ = parser.parse_nested_block(|block| {
                        parse_rule_list(block, rules, order);
                        Ok::<_, CssParseError<'_, ()>>(())
                    });
                }
                _ => skip_to_next_rule(parser),
            }
        }
        other => {
            tracing::debug!("Skipping at-rule: @{}", other);
            skip_at_rule(parser);
        }
    }
}

/// Parse a single CSS rule: selector-list { declarations }
fn parse_rule(parser: &mut Parser<'_, '_>, order: u32) -> Result<CssRule> {
    let line = parser.current_source_location().line + 1;

    let selectors = parser
        .parse_until_before(cssparser::Delimiter::CurlyBracketBlock, |p| {
            parse_selector_list(p).map_err(|_| p.new_custom_error(()))
        })
        .map_err(|e: CssParseError<'_, ()>| {
            Error::parse(format!("Failed to parse selector: {:?}", e), line)
        })?;

    let declarations = match parser.next() {
        Ok(Token::CurlyBracketBlock) => parser
            .parse_nested_block(|block| parse_declarations(block))
            .map_err(|e: CssParseError<'_, ()>| {
                Error::parse(format!("Failed to parse declaration block: {:?}", e), line)
            })?,
        _ => {
            return Err(Error::parse("Expected '{' after selector", line));
        }
    };

    Ok(CssRule::new(selectors, declarations, line, order))
}

/// Parse a comma-separated selector list.
///
/// Whitespace between compound selectors is significant (descendant
/// combinator), so this loop reads tokens including whitespace.
fn parse_selector_list(parser: &mut Parser<'_, '_>) -> Result<Vec<Selector>> {
    let mut selectors = vec![];
    let mut parts = vec![];
    let mut combinators = vec![];
    let mut current = SelectorPart::default();
    let mut pending_ws = false;

    parser.skip_whitespace();

    loop {
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        match &token {
            Token::WhiteSpace(_) => {
                pending_ws = true;
                continue;
            }

            Token::Comma => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
                if parts.is_empty() {
                    return Err(Error::invalid_selector(
                        "",
                        "Empty selector before ','",
                    ));
                }
                selectors.push(Selector {
                    parts: std::mem::take(&mut parts),
                    combinators: std::mem::take(&mut combinators),
                });
            }

            Token::Delim('>') => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                    combinators.push(Combinator::Child);
                }
            }

            Token::Delim('+') => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                    combinators.push(Combinator::AdjacentSibling);
                }
            }

            Token::Delim('~') => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                    combinators.push(Combinator::GeneralSibling);
                }
            }

            Token::Ident(name) => {
                descend_if_needed(&mut parts, &mut combinators, &mut current, pending_ws);
                if current.type_selector.is_some() {
                    return Err(Error::invalid_selector(
                        name.to_string(),
                        "Unexpected identifier",
                    ));
                }
                current.type_selector = Some(TypeSelector::Element(name.to_string()));
            }

            Token::Delim('*') => {
                descend_if_needed(&mut parts, &mut combinators, &mut current, pending_ws);
                current.type_selector = Some(TypeSelector::Universal);
            }

            Token::Delim('.') => {
                descend_if_needed(&mut parts, &mut combinators, &mut current, pending_ws);
                let class = parser
                    .expect_ident()
                    .map_err(|_| Error::invalid_selector(".", "Expected class name after '.'"))?;
                current.classes.push(class.to_string());
            }

            Token::IDHash(id) => {
                descend_if_needed(&mut parts, &mut combinators, &mut current, pending_ws);
                current.id = Some(id.to_string());
            }

            Token::SquareBracketBlock => {
                descend_if_needed(&mut parts, &mut combinators, &mut current, pending_ws);
                current.attributes.push(read_attribute(parser)?);
            }

            Token::Colon => {
                descend_if_needed(&mut parts, &mut combinators, &mut current, pending_ws);
                let pseudo = parse_pseudo(parser)?;
                current.pseudo_classes.push(pseudo);
            }

            _ => {
                // Unknown token ends selector parsing
                break;
            }
        }

        pending_ws = false;
    }

    if !current.is_empty() {
        parts.push(current);
    }

    if !parts.is_empty() {
        selectors.push(Selector { parts, combinators });
    }

    if selectors.is_empty() {
        return Err(Error::invalid_selector("", "Empty selector"));
    }

    Ok(selectors)
}

/// Start a new descendant part when whitespace separated compound selectors.
fn descend_if_needed(
    parts: &mut Vec<SelectorPart>,
    combinators: &mut Vec<Combinator>,
    current: &mut SelectorPart,
    pending_ws: bool,
) {
    if pending_ws && !current.is_empty() {
        parts.push(std::mem::take(current));
        combinators.push(Combinator::Descendant);
    }
}

/// Consume an attribute selector block and return its raw contents.
///
/// The naming checks never interpret attribute selectors; the raw text is
/// kept so the selector still renders and counts toward specificity.
fn read_attribute(parser: &mut Parser<'_, '_>) -> Result<String> {
    parser
        .parse_nested_block(|block| {
            let start = block.position();
            while !block.is_exhausted() {
                let _ = block.next_including_whitespace();
            }
            let end = block.position();
            Ok::<_, CssParseError<'_, ()>>(block.slice(start..end).trim().to_string())
        })
        .map_err(|_| Error::invalid_selector("[", "Invalid attribute selector"))
}

/// Parse a pseudo-class or pseudo-element after a ':' token.
fn parse_pseudo(parser: &mut Parser<'_, '_>) -> Result<PseudoClass> {
    let token = match parser.next_including_whitespace() {
        Ok(t) => t.clone(),
        Err(_) => {
            return Err(Error::invalid_selector(":", "Expected pseudo-class name"));
        }
    };

    match &token {
        Token::Ident(name) => Ok(PseudoClass::from_css(name)),

        Token::Function(name) => {
            let func = name.to_string();
            if func.eq_ignore_ascii_case("not") {
                let inner = parser
                    .parse_nested_block(|p| parse_simple_selector(p))
                    .map_err(|_: CssParseError<'_, ()>| {
                        Error::invalid_selector(":not", "Invalid :not() argument")
                    })?;
                Ok(PseudoClass::Not(Box::new(inner)))
            } else {
                // Keep unknown functional pseudo-classes opaque
                let _ = parser.parse_nested_block(|p| {
                    while !p.is_exhausted() {
                        let _ = p.next();
                    }
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                Ok(PseudoClass::Other(func.to_lowercase()))
            }
        }

        // Pseudo-element (::before etc.) - treated as an opaque pseudo
        Token::Colon => {
            let name = parser
                .expect_ident()
                .map_err(|_| Error::invalid_selector("::", "Expected pseudo-element name"))?;
            Ok(PseudoClass::Other(name.to_lowercase()))
        }

        _ => Err(Error::invalid_selector(
            ":",
            "Expected pseudo-class name after ':'",
        )),
    }
}

/// Parse a simple selector (for :not() argument).
fn parse_simple_selector<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<SelectorPart, CssParseError<'i, ()>> {
    let mut part = SelectorPart::default();

    parser.skip_whitespace();

    while let Ok(token) = parser.next() {
        match token.clone() {
            Token::Ident(name) => {
                part.type_selector = Some(TypeSelector::Element(name.to_string()));
            }
            Token::Delim('*') => {
                part.type_selector = Some(TypeSelector::Universal);
            }
            Token::Delim('.') => {
                let class = parser.expect_ident()?;
                part.classes.push(class.to_string());
            }
            Token::IDHash(id) => {
                part.id = Some(id.to_string());
            }
            Token::SquareBracketBlock => {
                let attribute = parser.parse_nested_block(|block| {
                    let start = block.position();
                    while !block.is_exhausted() {
                        let _ = block.next_including_whitespace();
                    }
                    let end = block.position();
                    Ok::<_, CssParseError<'i, ()>>(block.slice(start..end).trim().to_string())
                })?;
                part.attributes.push(attribute);
            }
            _ => break,
        }
    }

    Ok(part)
}

/// Parse the declarations of a rule block.
fn parse_declarations<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Vec<Declaration>, CssParseError<'i, ()>> {
    let mut declarations = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let line = parser.current_source_location().line + 1;

        let property = match parser.expect_ident() {
            Ok(name) => Some(name.to_string().to_lowercase()),
            Err(_) => None,
        };
        let Some(property) = property else {
            skip_declaration(parser);
            continue;
        };

        if parser.expect_colon().is_err() {
            skip_declaration(parser);
            continue;
        }

        parser.skip_whitespace();
        let (raw, important) = read_raw_value(parser);

        declarations.push(Declaration {
            property,
            value: raw,
            important,
            line,
        });
    }

    Ok(declarations)
}

/// Consume a declaration value up to the next ';' and return its raw text
/// with any trailing `!important` stripped.
fn read_raw_value(parser: &mut Parser<'_, '_>) -> (String, bool) {
    let start: SourcePosition = parser.position();
    let end: SourcePosition;

    loop {
        let state = parser.state();
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => {
                end = state.position();
                break;
            }
            Ok(_) => {}
        }
    }

    let raw = parser.slice(start..end).trim().to_string();

    if let Some(m) = IMPORTANT_RE.find(&raw) {
        let stripped = raw[..m.start()].trim_end().to_string();
        (stripped, true)
    } else {
        (raw, false)
    }
}

/// Skip to the next rule (error recovery).
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                // Skip block contents
                let _ = parser.parse_nested_block(|p| {
                    while !p.is_exhausted() {
                        let _ = p.next();
                    }
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                return;
            }
            Err(_) => return,
            _ => {}
        }
    }
}

/// Skip a non-grouping at-rule: everything up to ';' or past its block.
fn skip_at_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return,
            Ok(Token::CurlyBracketBlock) => {
                let _ = parser.parse_nested_block(|p| {
                    while !p.is_exhausted() {
                        let _ = p.next();
                    }
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                return;
            }
            _ => {}
        }
    }
}

/// Skip to the end of the current declaration (error recovery).
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return,
            _ => {}
        }
    }
}
