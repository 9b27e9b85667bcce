use serde::{Deserialize, Serialize};

use crate::document::render::Renderable;
use crate::document::values::Link;

/// Visual separator between contact fields in the heading.
pub const CONTACT_SEPARATOR: &str = " $|$ ";

/// Name and contact heading at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleBlock {
    pub first_name: String,
    #[serde(default)]
    pub middle_initial: Option<String>,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    /// Text shown for the email when it differs from the address itself
    /// (e.g. after LaTeX escaping). Falls back to `email`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_display: Option<String>,
    #[serde(default)]
    pub urls: Vec<Link>,
}

impl TitleBlock {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        TitleBlock {
            first_name: first_name.into(),
            middle_initial: None,
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            email_display: None,
            urls: Vec::new(),
        }
    }

    pub fn with_middle_initial(mut self, initial: char) -> Self {
        self.middle_initial = Some(initial.to_string());
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.urls.push(link);
        self
    }

    /// `mailto:` link for the email address.
    pub fn email_link(&self) -> Link {
        Link {
            url: format!("mailto:{}", self.email),
            text: self.email_display.clone().unwrap_or_else(|| self.email.clone()),
        }
    }

    /// `First Last`, or `First M. Last` when a middle initial is set.
    pub fn full_name(&self) -> String {
        match &self.middle_initial {
            Some(initial) => format!("{} {initial}. {}", self.first_name, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

impl Renderable for TitleBlock {
    fn render(&self) -> String {
        let mut contact = vec![self.phone_number.clone(), self.email_link().render()];
        contact.extend(self.urls.iter().map(Link::render));

        format!(
            "\\begin{{center}}\n    \\textbf{{\\Huge \\scshape {}}} \\\\ \\vspace{{1pt}}\n    \\small {}\n\\end{{center}}",
            self.full_name(),
            contact.join(CONTACT_SEPARATOR)
        )
    }
}
