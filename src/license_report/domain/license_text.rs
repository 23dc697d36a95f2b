/// LicenseText value object: the full text of a license and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseText {
    text: String,
    url: String,
}

impl LicenseText {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Text shown when the license could not be retrieved from `url`
    pub fn placeholder(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            text: format!(
                "The license text could not be retrieved. Please refer to {} for the full license text.",
                url
            ),
            url,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_parts(self) -> (String, String) {
        (self.text, self.url)
    }
}
