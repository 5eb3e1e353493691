//! Supported languages
//!
//! Editor language ids whose documents may be sorted, and the file
//! extensions that map to them.

use std::collections::HashMap;
use std::path::Path;

/// A language documents can be sorted in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Editor language id (e.g. "html", "typescriptreact")
    pub id: &'static str,
    /// File extensions without the dot
    pub extensions: &'static [&'static str],
}

/// Built-in language table
pub const LANGUAGES: &[Language] = &[
    Language {
        id: "html",
        extensions: &["html", "htm"],
    },
    Language {
        id: "javascript",
        extensions: &["js", "mjs", "cjs"],
    },
    Language {
        id: "javascriptreact",
        extensions: &["jsx"],
    },
    Language {
        id: "typescript",
        extensions: &["ts", "mts", "cts"],
    },
    Language {
        id: "typescriptreact",
        extensions: &["tsx"],
    },
    Language {
        id: "vue",
        extensions: &["vue"],
    },
    Language {
        id: "svelte",
        extensions: &["svelte"],
    },
    Language {
        id: "astro",
        extensions: &["astro"],
    },
    Language {
        id: "php",
        extensions: &["php"],
    },
    Language {
        id: "blade",
        extensions: &["blade.php"],
    },
    Language {
        id: "twig",
        extensions: &["twig"],
    },
    Language {
        id: "erb",
        extensions: &["erb"],
    },
    Language {
        id: "elixir",
        extensions: &["ex", "exs"],
    },
    Language {
        id: "phoenix-heex",
        extensions: &["heex", "leex"],
    },
    Language {
        id: "django-html",
        extensions: &["djhtml"],
    },
    Language {
        id: "jinja-html",
        extensions: &["jinja", "jinja2", "j2"],
    },
    Language {
        id: "nunjucks",
        extensions: &["njk"],
    },
    Language {
        id: "handlebars",
        extensions: &["hbs", "handlebars"],
    },
    Language {
        id: "razor",
        extensions: &["cshtml", "razor"],
    },
    Language {
        id: "markdown",
        extensions: &["md"],
    },
    Language {
        id: "mdx",
        extensions: &["mdx"],
    },
    Language {
        id: "rust",
        extensions: &["rs"],
    },
    Language {
        id: "css",
        extensions: &["css"],
    },
    Language {
        id: "scss",
        extensions: &["scss"],
    },
    Language {
        id: "sass",
        extensions: &["sass"],
    },
    Language {
        id: "less",
        extensions: &["less"],
    },
    Language {
        id: "postcss",
        extensions: &["pcss", "postcss"],
    },
];

/// Whether documents with language `id` may be sorted
pub fn is_supported(id: &str) -> bool {
    LANGUAGES.iter().any(|lang| lang.id == id)
}

/// Extension -> language id lookup
#[derive(Debug, Clone)]
pub struct LanguageMap {
    extension_map: HashMap<String, &'static str>,
}

impl LanguageMap {
    /// Create a map of the built-in languages
    pub fn new() -> Self {
        let mut map = Self {
            extension_map: HashMap::new(),
        };
        for lang in LANGUAGES {
            map.add_language(lang);
        }
        map
    }

    /// Register every extension of `lang`
    pub fn add_language(&mut self, lang: &Language) {
        for ext in lang.extensions {
            self.extension_map.insert(ext.to_lowercase(), lang.id);
        }
    }

    /// Detect the language id from a file name
    ///
    /// Compound extensions (`view.blade.php`) win over the last extension.
    pub fn detect_language(&self, filename: &Path) -> Option<&'static str> {
        let name = filename.file_name()?.to_str()?.to_lowercase();
        let mut rest = name.as_str();
        while let Some((_, ext)) = rest.split_once('.') {
            if let Some(id) = self.extension_map.get(ext) {
                return Some(*id);
            }
            rest = ext;
        }
        None
    }
}

impl Default for LanguageMap {
    fn default() -> Self {
        Self::new()
    }
}
