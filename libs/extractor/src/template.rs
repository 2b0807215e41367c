use crate::error::{ExtractError, ExtractResult};

pub const TEXT_VARIABLE: &str = "text";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(String),
}

/// Single-slot prompt template. `{text}` is replaced by the caller's input,
/// `{{` and `}}` stand for literal braces so JSON examples can be embedded.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    pub fn parse(template: &str) -> ExtractResult<Self> {
        let mut segments = vec![];
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((index, c)) = chars.next() {
            match c {
                '{' if chars.peek().map(|(_, c)| *c) == Some('{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek().map(|(_, c)| *c) == Some('}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        match c {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => break,
                            _ => name.push(c),
                        }
                    }
                    if !closed {
                        return Err(ExtractError::Template(format!(
                            "unclosed `{{` at byte {index}"
                        )));
                    }
                    if name.trim().is_empty() {
                        return Err(ExtractError::Template(format!(
                            "empty placeholder at byte {index}"
                        )));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Variable(name.trim().to_string()));
                }
                '}' => {
                    return Err(ExtractError::Template(format!(
                        "single `}}` at byte {index}, use `}}}}` for a literal brace"
                    )));
                }
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    pub fn input_variables(&self) -> Vec<&str> {
        let mut variables: Vec<&str> = vec![];
        for segment in &self.segments {
            if let Segment::Variable(name) = segment {
                if !variables.contains(&name.as_str()) {
                    variables.push(name);
                }
            }
        }
        variables
    }

    pub fn render(&self, text: &str) -> ExtractResult<String> {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => rendered.push_str(literal),
                Segment::Variable(name) if name == TEXT_VARIABLE => {
                    rendered.push_str(text)
                }
                Segment::Variable(name) => {
                    return Err(ExtractError::Template(format!(
                        "unknown placeholder `{{{name}}}`, only `{{{TEXT_VARIABLE}}}` is supported"
                    )));
                }
            }
        }
        Ok(rendered)
    }
}
