use std::fs;
use std::io;

use randomizer_core::DictionaryRef;

const BUNDLED: &[(&str, &str)] = &[
    (
        "simple.dic",
        include_str!("../../assets/dictionaries/simple.dic"),
    ),
    (
        "english.dic",
        include_str!("../../assets/dictionaries/english.dic"),
    ),
];

/// Where the words of a dictionary come from.
pub trait DictionarySource: Send + Sync {
    /// Source identity, used as the cache key.
    fn uid(&self) -> String;

    /// Raw lines of the source, unfiltered.
    fn read_lines(&self) -> io::Result<Vec<String>>;

    /// Whether the backing resource currently exists.
    fn exists(&self) -> bool {
        true
    }
}

/// Paths of the dictionaries embedded in the binary.
pub fn bundled_paths() -> impl Iterator<Item = &'static str> {
    BUNDLED.iter().map(|(path, _)| *path)
}

fn bundled_contents(path: &str) -> Option<&'static str> {
    BUNDLED
        .iter()
        .find(|(candidate, _)| *candidate == path)
        .map(|(_, contents)| *contents)
}

impl DictionarySource for DictionaryRef {
    fn uid(&self) -> String {
        DictionaryRef::uid(self)
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        let contents = match self {
            DictionaryRef::Bundled { path } => bundled_contents(path)
                .ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("no bundled dictionary at {path}"),
                    )
                })?
                .to_string(),
            DictionaryRef::User { path } => fs::read_to_string(path)?,
        };
        Ok(contents.lines().map(str::to_string).collect())
    }

    fn exists(&self) -> bool {
        match self {
            DictionaryRef::Bundled { path } => bundled_contents(path).is_some(),
            DictionaryRef::User { path } => path.is_file(),
        }
    }
}

/// An in-memory source, handy for callers that build word lists on the fly.
#[derive(Debug, Clone)]
pub struct InlineSource {
    uid: String,
    lines: Vec<String>,
}

impl InlineSource {
    pub fn new(uid: impl Into<String>, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            uid: uid.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl DictionarySource for InlineSource {
    fn uid(&self) -> String {
        self.uid.clone()
    }

    fn read_lines(&self) -> io::Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}
