/// Visual state of a single section.
///
/// Owned by [`FoldState`](crate::fold::FoldState); presentation layers
/// read it and never write it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionState {
    /// Folded down to a narrow rail. Every section starts here.
    #[default]
    Collapsed,
    /// Opened to a full panel showing the link list.
    Expanded,
}

impl SectionState {
    pub const fn is_collapsed(self) -> bool {
        matches!(self, Self::Collapsed)
    }

    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// One entry in a section's link list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// One collapsible container in the strip.
#[derive(Debug, Clone)]
pub struct Section {
    /// Stable identifier, unique within the page.
    pub id: String,
    /// Header title.
    pub title: String,
    /// Links shown while the section is expanded.
    pub links: Vec<Link>,
    /// Jump-hint character (bound as hyper+<hint> by
    /// [`Keybinds::bind_hints`](crate::keybinds::Keybinds::bind_hints)).
    pub hint: Option<char>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            links: Vec::new(),
            hint: None,
        }
    }

    pub fn link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.push(Link::new(label, url));
        self
    }

    pub fn links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links.extend(links);
        self
    }

    pub fn hint(mut self, hint: char) -> Self {
        self.hint = Some(hint);
        self
    }
}

/// The ordered set of sibling sections on the page.
///
/// Built once by the page-construction side (config loader, demo code)
/// and handed to [`FoldState::new`](crate::fold::FoldState::new); the
/// set never changes afterwards.
#[derive(Debug, Clone)]
pub struct Page {
    sections: Vec<Section>,
    /// Header indicator while expanded.
    pub expanded_char: char,
    /// Rail indicator while collapsed.
    pub collapsed_char: char,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            expanded_char: '▼',
            collapsed_char: '▶',
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn with_indicators(mut self, expanded: char, collapsed: char) -> Self {
        self.expanded_char = expanded;
        self.collapsed_char = collapsed;
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section ids in page order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Page-order index of a section.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
