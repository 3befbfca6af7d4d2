use logos::Logos;

/// Tokens of the line-oriented scene-description format. The format is
/// whitespace-insensitive once comments are stripped; every directive is a
/// keyword followed by a fixed number of numeric fields (or one file name).
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[error]
    Error,
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,

    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    // Image and camera directives
    // ----------------------------------------------------------------
    #[token("size")]
    KwSize,
    #[token("output")]
    KwOutput,
    #[token("camera")]
    KwCamera,
    #[token("background")]
    KwBackground,

    // Lights and material state
    // ----------------------------------------------------------------
    #[token("directional")]
    KwDirectional,
    #[token("point")]
    KwPoint,
    #[token("ambient")]
    KwAmbient,
    #[token("diffuse")]
    KwDiffuse,
    #[token("specular")]
    KwSpecular,
    #[token("emission")]
    KwEmission,
    #[token("shininess")]
    KwShininess,

    // Transform stack
    // ----------------------------------------------------------------
    #[token("pushTransform")]
    KwPushTransform,
    #[token("popTransform")]
    KwPopTransform,
    #[token("translate")]
    KwTranslate,
    #[token("rotate")]
    KwRotate,
    #[token("scale")]
    KwScale,

    // Geometry
    // ----------------------------------------------------------------
    #[token("sphere")]
    KwSphere,

    #[regex(
        r"-?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?",
        |lex| lex.slice().parse()
    )]
    Number(f32),

    // File names and unrecognized directive words. Exact directive
    // keywords take precedence over this catch-all.
    #[regex(r"[A-Za-z_][A-Za-z0-9_./-]*", |lex| lex.slice().to_string())]
    Word(String),
}
