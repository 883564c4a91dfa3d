use std::cell::Cell;
use std::num::NonZeroUsize;

use svgscene::source::*;
use svgscene::{EId, Options};

const SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg'><rect width='1'/></svg>";

/// Serves a single document and counts requests.
struct CountingFetcher {
    requests: Cell<u32>,
}

impl CountingFetcher {
    fn new() -> Self {
        CountingFetcher {
            requests: Cell::new(0),
        }
    }
}

impl Fetcher for CountingFetcher {
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, FetchError> {
        self.requests.set(self.requests.get() + 1);
        match uri {
            "mem://image.svg" => Ok(SVG.as_bytes().to_vec()),
            "mem://broken.svg" => Ok(vec![0xff, 0xfe]),
            _ => Err(FetchError::UnsupportedUri(uri.to_string())),
        }
    }
}

fn lru_cache() -> LruSourceCache {
    LruSourceCache::new(NonZeroUsize::new(4).unwrap())
}

#[test]
fn cache_hit() {
    let mut loader = Loader::new(lru_cache(), CountingFetcher::new());
    assert_eq!(loader.load("mem://image.svg").unwrap(), SVG);
    assert_eq!(loader.load("mem://image.svg").unwrap(), SVG);
    assert_eq!(loader.fetcher.requests.get(), 1);
    assert!(loader.cache.contains("mem://image.svg"));
}

#[test]
fn no_cache() {
    let mut loader = Loader::new(NoCache, CountingFetcher::new());
    loader.load("mem://image.svg").unwrap();
    loader.load("mem://image.svg").unwrap();
    assert_eq!(loader.fetcher.requests.get(), 2);
}

#[test]
fn no_cache_flag() {
    let mut loader = Loader::new(lru_cache(), CountingFetcher::new());
    loader.no_cache = true;
    loader.load("mem://image.svg").unwrap();
    assert!(loader.cache.is_empty());
}

#[test]
fn failures_are_not_cached() {
    let mut loader = Loader::new(lru_cache(), CountingFetcher::new());
    assert!(matches!(
        loader.load("mem://missing.svg"),
        Err(LoadError::Fetch(FetchError::UnsupportedUri(_)))
    ));
    assert!(matches!(
        loader.load("mem://broken.svg"),
        Err(LoadError::Parse(svgscene::Error::NotAnUtf8Str))
    ));
    assert!(loader.cache.is_empty());
}

#[test]
fn load_tree() {
    let mut loader = Loader::new(lru_cache(), CountingFetcher::new());
    let opt = Options::default();

    let tree = loader
        .load_tree(&Source::Uri("mem://image.svg".to_string()), &opt)
        .unwrap();
    assert_eq!(tree.root().first_element_child().map(|e| e.kind()), Some(EId::Rect));

    let tree2 = loader.load_tree(&Source::Data(SVG.to_string()), &opt).unwrap();
    assert!(tree == tree2);
    assert_eq!(loader.fetcher.requests.get(), 1);

    let res = loader.load_tree(&Source::Data("<html/>".to_string()), &opt);
    assert!(matches!(
        res,
        Err(LoadError::Parse(svgscene::Error::MissingSvgElement))
    ));
}

#[test]
fn file_fetcher() {
    let dir = std::env::temp_dir().join(format!("svgscene-source-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("image.svg"), SVG).unwrap();

    let fetcher = FileFetcher {
        resources_dir: Some(dir.clone()),
    };
    let mut loader = Loader::new(lru_cache(), fetcher);
    assert_eq!(loader.load("image.svg").unwrap(), SVG);

    let abs_uri = format!("file://{}", dir.join("image.svg").display());
    assert_eq!(loader.load(&abs_uri).unwrap(), SVG);

    // Served from the cache.
    std::fs::remove_file(dir.join("image.svg")).unwrap();
    assert_eq!(loader.load("image.svg").unwrap(), SVG);
    assert!(matches!(loader.load("other.svg"), Err(LoadError::Fetch(FetchError::Io(_)))));

    std::fs::remove_dir_all(&dir).unwrap();
}
