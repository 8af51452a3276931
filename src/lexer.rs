use logos::Logos;

/// Tokens of the rep-data field, the part of an export line after the
/// exercise name.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum RepToken {
    /// A numeric token. The raw text is kept because counts and weights
    /// convert differently later on.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice().to_owned())]
    Number(String),

    #[token("sets")]
    Sets,

    #[token("rep")]
    Rep,

    #[token("kg")]
    Kg,

    #[token("×")]
    Times,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,
}

/// Tokenize a rep-data string.
///
/// Returns `None` when the text contains anything outside the rep-data
/// vocabulary; callers treat that the same as "no grammar matched".
pub fn lex(text: &str) -> Option<Vec<RepToken>> {
    RepToken::lexer(text).collect::<Result<Vec<_>, _>>().ok()
}
