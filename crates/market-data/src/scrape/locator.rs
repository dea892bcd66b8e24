//! Addressing a single node of a parsed HTML document.
//!
//! Two forms are accepted:
//! - an absolute structural path such as
//!   `/html/body/div[1]/section[4]/table/tbody/tr[1]/td[2]`, where `tag[n]`
//!   picks the n-th child element with that tag (1-based, default 1)
//! - any CSS selector, of which the first match is used
//!
//! Locators are compiled once when a page layout is built. Resolving one
//! against a document never fails loudly: a path that does not lead anywhere
//! yields `None`.

use std::fmt;
use std::str::FromStr;

use scraper::{ElementRef, Html, Selector};

use crate::errors::MarketDataError;

#[derive(Clone, Debug, PartialEq, Eq)]
struct PathStep {
    tag: String,
    /// 1-based position among same-tag siblings
    index: usize,
}

/// An absolute element path, the subset of XPath browsers emit for "copy XPath".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodePath {
    source: String,
    steps: Vec<PathStep>,
}

impl NodePath {
    pub fn parse(source: &str) -> Result<Self, MarketDataError> {
        let invalid = |message: &str| MarketDataError::InvalidLocator {
            locator: source.to_string(),
            message: message.to_string(),
        };

        let rest = source
            .trim()
            .strip_prefix('/')
            .ok_or_else(|| invalid("path must be absolute"))?;

        let steps = rest
            .split('/')
            .map(|raw| parse_step(raw).ok_or_else(|| invalid(&format!("bad step '{}'", raw))))
            .collect::<Result<Vec<_>, _>>()?;

        if steps.is_empty() {
            return Err(invalid("path is empty"));
        }

        Ok(Self {
            source: source.trim().to_string(),
            steps,
        })
    }

    /// Walk the document from its root element, one step per level.
    pub fn resolve<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        let (first, rest) = self.steps.split_first()?;
        let root = document.root_element();
        if root.value().name() != first.tag || first.index != 1 {
            return None;
        }

        rest.iter().try_fold(root, |current, step| {
            current
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|child| child.value().name() == step.tag)
                .nth(step.index - 1)
        })
    }
}

fn parse_step(raw: &str) -> Option<PathStep> {
    let (tag, index) = match raw.split_once('[') {
        Some((tag, predicate)) => {
            let index = predicate.strip_suffix(']')?.trim().parse::<usize>().ok()?;
            (tag, index)
        }
        None => (raw, 1),
    };

    let valid_tag = !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid_tag || index == 0 {
        return None;
    }

    Some(PathStep {
        tag: tag.to_ascii_lowercase(),
        index,
    })
}

/// Where to find one value on a page.
#[derive(Clone, Debug)]
pub enum CellLocator {
    Path(NodePath),
    Css { source: String, selector: Selector },
}

impl CellLocator {
    /// Compile a locator. Sources starting with `/` are structural paths,
    /// anything else is treated as a CSS selector.
    pub fn parse(source: &str) -> Result<Self, MarketDataError> {
        let trimmed = source.trim();
        if trimmed.starts_with('/') {
            return NodePath::parse(trimmed).map(Self::Path);
        }

        let selector = Selector::parse(trimmed).map_err(|e| MarketDataError::InvalidLocator {
            locator: trimmed.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self::Css {
            source: trimmed.to_string(),
            selector,
        })
    }

    /// The flattened text of the addressed node, or `None` if it does not exist.
    pub fn text(&self, document: &Html) -> Option<String> {
        let element = match self {
            Self::Path(path) => path.resolve(document),
            Self::Css { selector, .. } => document.select(selector).next(),
        }?;

        Some(element.text().collect::<String>())
    }

    pub fn source(&self) -> &str {
        match self {
            Self::Path(path) => &path.source,
            Self::Css { source, .. } => source,
        }
    }
}

impl FromStr for CellLocator {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CellLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div id="app">
            <div>header</div>
            <div>
              <section><p>intro</p></section>
              <section>
                <table>
                  <tr><td>24K</td><td>&#8377;7,250</td><td><b>&#8377;</b>7,240</td></tr>
                  <tr><td>22K</td><td>&#8377;6,650</td></tr>
                </table>
              </section>
            </div>
          </div>
        </body></html>
    "#;

    fn doc() -> Html {
        Html::parse_document(PAGE)
    }

    #[test]
    fn test_path_resolves_through_implied_tbody() {
        let locator =
            CellLocator::parse("/html/body/div[1]/div[2]/section[2]/table/tbody/tr[1]/td[2]")
                .unwrap();
        assert_eq!(locator.text(&doc()).as_deref(), Some("₹7,250"));
    }

    #[test]
    fn test_text_is_flattened_across_children() {
        let locator =
            CellLocator::parse("/html/body/div/div[2]/section[2]/table/tbody/tr/td[3]").unwrap();
        assert_eq!(locator.text(&doc()).as_deref(), Some("₹7,240"));
    }

    #[test]
    fn test_missing_node_is_none() {
        let missing_row =
            CellLocator::parse("/html/body/div[1]/div[2]/section[2]/table/tbody/tr[5]/td[2]")
                .unwrap();
        assert_eq!(missing_row.text(&doc()), None);

        let missing_cell =
            CellLocator::parse("/html/body/div[1]/div[2]/section[2]/table/tbody/tr[2]/td[3]")
                .unwrap();
        assert_eq!(missing_cell.text(&doc()), None);

        let wrong_root = CellLocator::parse("/body/div[1]").unwrap();
        assert_eq!(wrong_root.text(&doc()), None);
    }

    #[test]
    fn test_truncated_document_is_none() {
        let truncated = Html::parse_document("<html><body><div><div>");
        let locator =
            CellLocator::parse("/html/body/div[1]/div[2]/section[2]/table/tbody/tr[1]/td[2]")
                .unwrap();
        assert_eq!(locator.text(&truncated), None);
    }

    #[test]
    fn test_css_selector_uses_first_match() {
        let locator = CellLocator::parse("section table tr:nth-of-type(2) td:nth-of-type(2)").unwrap();
        assert_eq!(locator.text(&doc()).as_deref(), Some("₹6,650"));
    }

    #[test]
    fn test_rejects_malformed_locators() {
        assert!(NodePath::parse("html/body").is_err());
        assert!(NodePath::parse("/html/body/div[0]").is_err());
        assert!(NodePath::parse("/html//div").is_err());
        assert!(NodePath::parse("/html/body/div[last()]").is_err());
        assert!(CellLocator::parse("td[").is_err());
    }

    #[test]
    fn test_display_shows_source() {
        let source = "/html/body/div[1]";
        assert_eq!(CellLocator::parse(source).unwrap().to_string(), source);
    }
}
