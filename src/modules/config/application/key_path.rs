use serde_json::Value;

//
// ──────────────────────────────────────────────────────────
// Key path syntax
// ──────────────────────────────────────────────────────────
//
// skills.languages              object field, or array item whose key/name matches
// projects[0].title             array index
// social[name="GitHub"].url     first array item whose field equals the value
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeyPathError {
    #[error("Key path is empty")]
    Empty,

    #[error("Malformed key path at position {0}")]
    Malformed(usize),
}

#[derive(Debug, Clone, PartialEq)]
enum Step {
    Field(String),
    Index(usize),
    Select { field: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyPath {
    steps: Vec<Step>,
}

impl KeyPath {
    pub fn parse(raw: &str) -> Result<Self, KeyPathError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(KeyPathError::Empty);
        }

        let chars: Vec<char> = raw.chars().collect();
        let mut steps = Vec::new();
        let mut pos = 0;
        let mut expect_field = true;

        while pos < chars.len() {
            match chars[pos] {
                '.' if !expect_field => {
                    expect_field = true;
                    pos += 1;
                }
                '[' => {
                    let (step, next) = parse_bracket(&chars, pos)?;
                    steps.push(step);
                    expect_field = false;
                    pos = next;
                }
                c if expect_field && is_ident(c) => {
                    let start = pos;
                    while pos < chars.len() && is_ident(chars[pos]) {
                        pos += 1;
                    }
                    steps.push(Step::Field(chars[start..pos].iter().collect()));
                    expect_field = false;
                }
                _ => return Err(KeyPathError::Malformed(pos)),
            }
        }

        if expect_field {
            return Err(KeyPathError::Malformed(chars.len()));
        }

        Ok(Self { steps })
    }

    /// Walks `root` and returns the addressed node, if any.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.steps.iter().try_fold(root, |node, step| match step {
            Step::Field(name) => match node {
                Value::Object(map) => map.get(name),
                Value::Array(items) => items.iter().find(|item| {
                    ["key", "name"]
                        .iter()
                        .any(|field| item.get(*field).and_then(Value::as_str) == Some(name))
                }),
                _ => None,
            },
            Step::Index(idx) => node.as_array().and_then(|items| items.get(*idx)),
            Step::Select { field, value } => node.as_array().and_then(|items| {
                items
                    .iter()
                    .find(|item| item.get(field).and_then(Value::as_str) == Some(value.as_str()))
            }),
        })
    }
}

fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

fn parse_bracket(chars: &[char], open: usize) -> Result<(Step, usize), KeyPathError> {
    let close = closing_bracket(chars, open).ok_or(KeyPathError::Malformed(open))?;

    let inner: String = chars[open + 1..close].iter().collect();
    let inner = inner.trim();

    if let Ok(idx) = inner.parse::<usize>() {
        return Ok((Step::Index(idx), close + 1));
    }

    let (field, value) = inner.split_once('=').ok_or(KeyPathError::Malformed(open))?;
    let field = field.trim();
    let value = value.trim();

    let unquoted = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .ok_or(KeyPathError::Malformed(open))?;

    if field.is_empty() || !field.chars().all(is_ident) {
        return Err(KeyPathError::Malformed(open));
    }

    Ok((
        Step::Select {
            field: field.to_string(),
            value: unquoted.to_string(),
        },
        close + 1,
    ))
}

/// Position of the `]` closing the bracket at `open`; brackets inside quotes don't count.
fn closing_bracket(chars: &[char], open: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (pos, &c) in chars.iter().enumerate().skip(open + 1) {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, ']') => return Some(pos),
            (None, _) => {}
        }
    }
    None
}
