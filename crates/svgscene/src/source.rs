// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
SVG source acquisition.

A [`Loader`] consults a [`SourceCache`] before asking a [`Fetcher`] for the data,
so the conversion itself always receives a fully loaded string.
*/

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use lru::LruCache;

use crate::{Error, Options, Tree};

/// A decoded SVG sources cache.
///
/// Keys are source URIs.
pub trait SourceCache {
    /// Returns a cached source.
    fn get(&mut self, key: &str) -> Option<String>;

    /// Stores a source.
    fn put(&mut self, key: &str, value: String);
}

/// A cache that never stores anything.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoCache;

impl SourceCache for NoCache {
    #[inline]
    fn get(&mut self, _: &str) -> Option<String> {
        None
    }

    #[inline]
    fn put(&mut self, _: &str, _: String) {}
}

/// A bounded LRU cache.
///
/// The least recently used source is evicted once the capacity is reached.
#[derive(Debug)]
pub struct LruSourceCache(LruCache<String, String>);

impl LruSourceCache {
    /// Creates a new cache with the specified capacity.
    pub fn new(capacity: NonZeroUsize) -> Self {
        LruSourceCache(LruCache::new(capacity))
    }

    /// Returns the number of cached sources.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks that the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that a source is cached without updating its position.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }
}

impl SourceCache for LruSourceCache {
    fn get(&mut self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: String) {
        self.0.put(key.to_string(), value);
    }
}

/// A source fetching error.
#[derive(Debug)]
pub enum FetchError {
    /// The URI is not supported by the fetcher.
    UnsupportedUri(String),

    /// An I/O error.
    Io(std::io::Error),
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self {
        FetchError::Io(e)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            FetchError::UnsupportedUri(ref uri) => {
                write!(f, "'{}' is not supported", uri)
            }
            FetchError::Io(ref e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// A raw data provider.
pub trait Fetcher {
    /// Fetches the raw data referenced by `uri`.
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetches data from the local file system.
#[derive(Clone, Default, Debug)]
pub struct FileFetcher {
    /// Directory that will be used during relative paths resolving.
    ///
    /// Default: `None`
    pub resources_dir: Option<PathBuf>,
}

impl FileFetcher {
    /// Returns an absolute path if `resources_dir` is set and `rel_path` is relative.
    ///
    /// Otherwise returns `rel_path` as is.
    pub fn get_abs_path(&self, rel_path: &Path) -> PathBuf {
        match self.resources_dir {
            Some(ref dir) if rel_path.is_relative() => dir.join(rel_path),
            _ => rel_path.into(),
        }
    }
}

impl Fetcher for FileFetcher {
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, FetchError> {
        let path = match uri.strip_prefix("file://") {
            Some(path) => path,
            None if uri.contains("://") => return Err(FetchError::UnsupportedUri(uri.to_string())),
            None => uri,
        };

        let path = self.get_abs_path(Path::new(path));
        log::debug!("Loading '{}'.", path.display());
        Ok(std::fs::read(path)?)
    }
}

/// A source loading error.
#[derive(Debug)]
pub enum LoadError {
    /// Failed to fetch the data.
    Fetch(FetchError),

    /// Failed to decode or convert the data.
    Parse(Error),
}

impl From<FetchError> for LoadError {
    fn from(e: FetchError) -> Self {
        LoadError::Fetch(e)
    }
}

impl From<Error> for LoadError {
    fn from(e: Error) -> Self {
        LoadError::Parse(e)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            LoadError::Fetch(ref e) => write!(f, "failed to fetch an SVG cause {}", e),
            LoadError::Parse(ref e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoadError {}

/// An SVG source.
#[derive(Clone, PartialEq, Debug)]
pub enum Source {
    /// An SVG string.
    Data(String),
    /// An SVG location.
    Uri(String),
}

/// A cached source loader.
#[derive(Debug)]
pub struct Loader<C: SourceCache, F: Fetcher> {
    /// A sources cache.
    pub cache: C,

    /// A raw data provider.
    pub fetcher: F,

    /// Do not store loaded sources in the cache.
    ///
    /// Already cached sources are still used.
    ///
    /// Default: false
    pub no_cache: bool,
}

impl<C: SourceCache, F: Fetcher> Loader<C, F> {
    /// Creates a new loader.
    pub fn new(cache: C, fetcher: F) -> Self {
        Loader {
            cache,
            fetcher,
            no_cache: false,
        }
    }

    /// Loads an SVG string.
    ///
    /// Gzip compressed data is decompressed.
    pub fn load(&mut self, uri: &str) -> Result<String, LoadError> {
        if let Some(text) = self.cache.get(uri) {
            log::debug!("'{}' is loaded from cache.", uri);
            return Ok(text);
        }

        let data = self.fetcher.fetch(uri)?;
        let text = crate::decode_data(&data)?;

        if !self.no_cache {
            self.cache.put(uri, text.clone());
        }

        Ok(text)
    }

    /// Loads and converts an SVG.
    pub fn load_tree(&mut self, source: &Source, opt: &Options) -> Result<Tree, LoadError> {
        match source {
            Source::Data(ref text) => Ok(Tree::from_str(text, opt)?),
            Source::Uri(ref uri) => {
                let text = self.load(uri)?;
                Ok(Tree::from_str(&text, opt)?)
            }
        }
    }
}
