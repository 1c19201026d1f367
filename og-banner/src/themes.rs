//! The closed set of banner themes.
//!
//! Every theme is a static descriptor holding a display name, a description and
//! a CSS generator. Generators are pure functions of a [`Gradient`]; colours are
//! never checked, so whatever the caller supplies ends up in the CSS as-is.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// The two colours a theme builds its visuals from, as bare hex digits
/// (`667eea`, no leading `#`).
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Gradient {
    pub start: String,
    pub end: String,
}

impl Gradient {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parse a comma-separated colour list such as `667eea, #764ba2`.
    ///
    /// Each entry is trimmed and loses one leading `#`. A missing second entry
    /// is left empty and anything past the second is ignored.
    pub fn parse(raw: &str) -> Self {
        let mut colours = raw.split(',').map(|colour| {
            let colour = colour.trim();
            colour.strip_prefix('#').unwrap_or(colour).to_owned()
        });

        let start = colours.next().unwrap_or_default();
        let end = colours.next().unwrap_or_default();
        Self { start, end }
    }
}

/// Key of a registered theme.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum ThemeKey {
    #[default]
    Modern,
    Minimal,
    Vibrant,
    Gradient,
    Glass,
    Tech,
}

impl ThemeKey {
    /// Every key, in registry order.
    pub const ALL: [ThemeKey; 6] = [
        ThemeKey::Modern,
        ThemeKey::Minimal,
        ThemeKey::Vibrant,
        ThemeKey::Gradient,
        ThemeKey::Glass,
        ThemeKey::Tech,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKey::Modern => "modern",
            ThemeKey::Minimal => "minimal",
            ThemeKey::Vibrant => "vibrant",
            ThemeKey::Gradient => "gradient",
            ThemeKey::Glass => "glass",
            ThemeKey::Tech => "tech",
        }
    }

    pub fn theme(self) -> &'static Theme {
        &THEMES[self as usize]
    }

    /// All keys joined with `", "`, in registry order.
    pub fn listing() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeKey {
    type Err = UnknownThemeKey;

    /// Exact, case-sensitive match.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == raw)
            .ok_or_else(|| UnknownThemeKey(raw.to_owned()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no theme is registered under the key \"{0}\"")]
pub struct UnknownThemeKey(pub String);

/// A registered visual style.
pub struct Theme {
    pub key: ThemeKey,
    pub name: &'static str,
    pub description: &'static str,
    generate: fn(&Gradient) -> String,
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("key", &self.key)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Theme {
    /// CSS that overrides the base banner stylesheet for this theme.
    pub fn generate_css(&self, gradient: &Gradient) -> String {
        (self.generate)(gradient)
    }
}

/// Indexed by `ThemeKey as usize`.
static THEMES: [Theme; 6] = [
    Theme {
        key: ThemeKey::Modern,
        name: "Modern",
        description: "Clean gradients with glassmorphism effects",
        generate: modern_css,
    },
    Theme {
        key: ThemeKey::Minimal,
        name: "Minimal",
        description: "Clean and simple with bold typography",
        generate: minimal_css,
    },
    Theme {
        key: ThemeKey::Vibrant,
        name: "Vibrant",
        description: "Bold colors with energetic design",
        generate: vibrant_css,
    },
    Theme {
        key: ThemeKey::Gradient,
        name: "Gradient",
        description: "Smooth flowing gradients throughout",
        generate: gradient_css,
    },
    Theme {
        key: ThemeKey::Glass,
        name: "Glass",
        description: "Frosted glass morphism effect",
        generate: glass_css,
    },
    Theme {
        key: ThemeKey::Tech,
        name: "Tech",
        description: "Futuristic with grid patterns",
        generate: tech_css,
    },
];

/// Every registered theme, in registry order.
pub fn all() -> &'static [Theme] {
    &THEMES
}

/// Look up a theme by its exact key.
pub fn lookup(key: &str) -> Option<&'static Theme> {
    key.parse::<ThemeKey>().ok().map(ThemeKey::theme)
}

fn diagonal(Gradient { start, end }: &Gradient) -> String {
    format!("linear-gradient(135deg, #{start} 0%, #{end} 100%)")
}

fn modern_css(gradient: &Gradient) -> String {
    let diagonal = diagonal(gradient);
    format!(
        "body {{ background: {diagonal}; position: relative; overflow: hidden; }}\n\
         body::before {{ content: ''; position: absolute; top: -50%; right: -50%; width: 100%; \
         height: 100%; background: radial-gradient(circle, rgba(255,255,255,0.1) 0%, transparent 70%); \
         border-radius: 50%; }}\n\
         .container {{ background: rgba(255, 255, 255, 0.95); backdrop-filter: blur(20px); \
         border: 1px solid rgba(255, 255, 255, 0.3); box-shadow: 0 30px 80px rgba(0, 0, 0, 0.25); }}\n\
         .icon {{ background: {diagonal}; box-shadow: 0 8px 32px rgba(0, 0, 0, 0.15); }}\n\
         h1 {{ background: {diagonal}; -webkit-background-clip: text; \
         -webkit-text-fill-color: transparent; background-clip: text; \
         filter: drop-shadow(0 2px 8px rgba(0, 0, 0, 0.1)); }}\n\
         .feature-icon {{ background: {diagonal}; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1); }}\n"
    )
}

fn minimal_css(Gradient { start, end }: &Gradient) -> String {
    // Black and white only; the pair is still exposed for anyone overriding it.
    format!(
        ":root {{ --gradient-start: #{start}; --gradient-end: #{end}; }}\n\
         body {{ background: #ffffff; }}\n\
         .container {{ background: #ffffff; border: 3px solid #000000; border-radius: 0; \
         box-shadow: 12px 12px 0 #000000; }}\n\
         .icon {{ background: #000000; border-radius: 8px; }}\n\
         h1 {{ color: #000000; letter-spacing: -0.02em; }}\n\
         .tagline {{ color: #404040; }}\n\
         .feature-icon {{ background: #000000; border-radius: 4px; }}\n\
         .footer {{ border-top: 2px solid #000000; }}\n\
         .github {{ color: #404040; }}\n"
    )
}

fn vibrant_css(gradient: &Gradient) -> String {
    let diagonal = diagonal(gradient);
    format!(
        "body {{ background: {diagonal}; position: relative; }}\n\
         body::before {{ content: ''; position: absolute; top: 0; left: 0; right: 0; bottom: 0; \
         background: radial-gradient(circle at 20% 20%, rgba(255,255,255,0.2) 0%, transparent 50%), \
         radial-gradient(circle at 80% 80%, rgba(0,0,0,0.1) 0%, transparent 50%); }}\n\
         .container {{ background: rgba(255, 255, 255, 0.98); border-radius: 32px; \
         box-shadow: 0 30px 90px rgba(0, 0, 0, 0.3); transform: perspective(1000px) rotateX(2deg); }}\n\
         .icon {{ background: {diagonal}; border-radius: 24px; \
         box-shadow: 0 12px 40px rgba(0, 0, 0, 0.2); transform: rotate(-5deg); }}\n\
         h1 {{ background: {diagonal}; -webkit-background-clip: text; \
         -webkit-text-fill-color: transparent; background-clip: text; transform: skewY(-2deg); }}\n\
         .feature-icon {{ background: {diagonal}; border-radius: 12px; \
         box-shadow: 0 6px 20px rgba(0, 0, 0, 0.15); }}\n"
    )
}

fn gradient_css(gradient: &Gradient) -> String {
    let Gradient { start, end } = gradient;
    let diagonal = diagonal(gradient);
    format!(
        "body {{ background: linear-gradient(135deg, #{start} 0%, #{end} 50%, #{start} 100%); }}\n\
         .container {{ background: linear-gradient(135deg, rgba(255,255,255,0.98) 0%, \
         rgba(255,255,255,0.95) 100%); backdrop-filter: blur(10px); \
         box-shadow: 0 20px 60px rgba(0, 0, 0, 0.2); }}\n\
         .icon {{ background: linear-gradient(135deg, rgba(255,255,255,0.3) 0%, \
         rgba(255,255,255,0.1) 100%); backdrop-filter: blur(10px); \
         border: 2px solid rgba(255,255,255,0.5); }}\n\
         h1 {{ background: linear-gradient(90deg, #{start} 0%, #{end} 50%, #{start} 100%); \
         -webkit-background-clip: text; -webkit-text-fill-color: transparent; \
         background-clip: text; background-size: 200% auto; }}\n\
         .feature-icon {{ background: {diagonal}; opacity: 0.9; }}\n"
    )
}

fn glass_css(gradient: &Gradient) -> String {
    let diagonal = diagonal(gradient);
    format!(
        "body {{ background: {diagonal}; }}\n\
         .container {{ background: rgba(255, 255, 255, 0.15); \
         backdrop-filter: blur(30px) saturate(180%); border: 1px solid rgba(255, 255, 255, 0.3); \
         box-shadow: 0 8px 32px rgba(0, 0, 0, 0.1), inset 0 1px 0 rgba(255, 255, 255, 0.5); }}\n\
         .icon {{ background: rgba(255, 255, 255, 0.25); backdrop-filter: blur(10px); \
         border: 1px solid rgba(255, 255, 255, 0.4); }}\n\
         h1 {{ color: #ffffff; text-shadow: 0 2px 20px rgba(0, 0, 0, 0.2); }}\n\
         .tagline {{ color: rgba(255, 255, 255, 0.95); }}\n\
         .feature {{ color: rgba(255, 255, 255, 0.9); }}\n\
         .feature-icon {{ background: rgba(255, 255, 255, 0.3); backdrop-filter: blur(5px); \
         border: 1px solid rgba(255, 255, 255, 0.4); }}\n\
         .footer {{ border-top: 1px solid rgba(255, 255, 255, 0.2); }}\n\
         .github {{ color: rgba(255, 255, 255, 0.8); }}\n\
         .highlight {{ background: rgba(255, 215, 0, 0.3); backdrop-filter: blur(10px); \
         border: 1px solid rgba(255, 215, 0, 0.4); color: #ffffff; }}\n"
    )
}

fn tech_css(gradient: &Gradient) -> String {
    let Gradient { start, end } = gradient;
    let diagonal = diagonal(gradient);
    format!(
        "body {{ background: {diagonal}, \
         linear-gradient(90deg, rgba(255,255,255,0.03) 1px, transparent 1px), \
         linear-gradient(0deg, rgba(255,255,255,0.03) 1px, transparent 1px); \
         background-size: 100% 100%, 40px 40px, 40px 40px; position: relative; }}\n\
         body::after {{ content: ''; position: absolute; top: 0; left: 0; right: 0; bottom: 0; \
         background: radial-gradient(circle at 50% 50%, rgba(255,255,255,0.1) 0%, transparent 50%); }}\n\
         .container {{ background: rgba(255, 255, 255, 0.95); \
         border: 1px solid rgba(255, 255, 255, 0.2); \
         box-shadow: 0 0 80px rgba(0, 0, 0, 0.3), inset 0 0 0 1px rgba(255, 255, 255, 0.1); \
         position: relative; }}\n\
         .container::before {{ content: ''; position: absolute; top: 0; left: 0; right: 0; \
         height: 2px; background: linear-gradient(90deg, transparent, #{start}, #{end}, transparent); }}\n\
         .icon {{ background: {diagonal}; box-shadow: 0 0 30px rgba(0, 0, 0, 0.3); position: relative; }}\n\
         .icon::before {{ content: ''; position: absolute; inset: -2px; background: {diagonal}; \
         border-radius: inherit; filter: blur(10px); opacity: 0.5; z-index: -1; }}\n\
         h1 {{ background: {diagonal}; -webkit-background-clip: text; \
         -webkit-text-fill-color: transparent; background-clip: text; position: relative; }}\n\
         .feature-icon {{ background: {diagonal}; box-shadow: 0 0 20px rgba(0, 0, 0, 0.2); }}\n"
    )
}
