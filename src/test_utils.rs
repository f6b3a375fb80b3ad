//! Document fixtures shared by unit tests, integration tests and benches.

/// Builds markdown pages with exact heading, link and image counts.
#[derive(Debug, Default, Clone)]
pub struct DocumentBuilder {
    lines: Vec<String>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn h1(self, text: &str) -> Self {
        self.line(format!("# {}", text))
    }

    pub fn h2s(mut self, n: usize) -> Self {
        for i in 1..=n {
            self.lines.push(format!("## Section {}", i));
        }
        self
    }

    pub fn h3s(mut self, n: usize) -> Self {
        for i in 1..=n {
            self.lines.push(format!("### Detail {}", i));
        }
        self
    }

    /// Site-relative links, internal for any domain.
    pub fn internal_links(mut self, n: usize) -> Self {
        for i in 1..=n {
            self.lines
                .push(format!("See [guide {}](/en/treatments/t{}).", i, i));
        }
        self
    }

    pub fn external_links(mut self, n: usize) -> Self {
        for i in 1..=n {
            self.lines
                .push(format!("Source: [reference {}](https://www.who.int/p{}).", i, i));
        }
        self
    }

    /// Images with empty alt text so they are not also counted as links.
    pub fn images(mut self, n: usize) -> Self {
        for i in 1..=n {
            self.lines.push(format!("![](/images/photo-{}.jpg)", i));
        }
        self
    }

    pub fn word_count(&self) -> usize {
        self.lines.iter().map(|l| l.split_whitespace().count()).sum()
    }

    /// Pad with filler prose until the document has exactly `total` words.
    pub fn filler_to_words(self, total: usize) -> Self {
        let missing = total.saturating_sub(self.word_count());
        if missing == 0 {
            return self;
        }
        self.line(vec!["care"; missing].join(" "))
    }

    pub fn build(&self) -> String {
        self.lines.join("\n")
    }
}

/// `n` space-separated words.
pub fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}
