use serde::{Deserialize, Serialize};

use crate::document::render::{Renderable, SectionItem, SectionLayout};

const SUBHEADING_LIST_START: &str = "  \\resumeSubHeadingListStart";
const SUBHEADING_LIST_END: &str = "  \\resumeSubHeadingListEnd";

const COMPACT_LIST_START: &str = " \\begin{itemize}[leftmargin=0.15in, label={}]\n    \\small{\\item{";
const COMPACT_LIST_END: &str = "    }}\n \\end{itemize}";
/// Line break between skill lines inside the single compact paragraph.
const COMPACT_ITEM_SEPARATOR: &str = " \\\\\n";

/// A titled group of entries that all share one item type.
///
/// The heading comes from `T::TITLE`, so two sections of the same `T` always
/// carry the same title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct Section<T> {
    #[serde(default)]
    items: Vec<T>,
}

impl<T: SectionItem> Section<T> {
    pub fn new() -> Self {
        Section { items: Vec::new() }
    }

    /// Appends an item. Duplicates are kept.
    pub fn add_item(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn with_item(mut self, item: T) -> Self {
        self.add_item(item);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn title(&self) -> &'static str {
        T::TITLE
    }

    pub(crate) fn map_items(self, f: impl FnMut(T) -> T) -> Self {
        Section {
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

impl<T: SectionItem> Default for Section<T> {
    fn default() -> Self {
        Section::new()
    }
}

impl<T: SectionItem> FromIterator<T> for Section<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Section {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: SectionItem> Extend<T> for Section<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: SectionItem> Renderable for Section<T> {
    fn render(&self) -> String {
        let (start, end, separator) = match T::KIND.layout() {
            SectionLayout::Subheadings => (SUBHEADING_LIST_START, SUBHEADING_LIST_END, "\n"),
            SectionLayout::Compact => (COMPACT_LIST_START, COMPACT_LIST_END, COMPACT_ITEM_SEPARATOR),
        };

        let body = self
            .items
            .iter()
            .map(Renderable::render)
            .collect::<Vec<_>>()
            .join(separator);

        let mut out = format!("\\section{{{}}}\n{start}\n", T::TITLE);
        if !body.is_empty() {
            out.push_str(&body);
            out.push('\n');
        }
        out.push_str(end);
        out
    }
}
