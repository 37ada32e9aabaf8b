//! Escaping utilities for values interpolated into eBay requests and URLs.
//!
//! Every value that reaches an XML request body or a sign-in URL goes through
//! one of these helpers.
//!
//! ## XML Escaping
//!
//! ```rust
//! use ebay_signin_client::security::xml;
//!
//! let username = xml::escape("o'brien&co");
//! let body = format!("<UserID>{}</UserID>", username);
//! assert_eq!(body, "<UserID>o&apos;brien&amp;co</UserID>");
//! ```
//!
//! ## URL Parameter Encoding
//!
//! ```rust
//! use ebay_signin_client::security::url;
//!
//! let sid = url::encode_session_id("abc+def/ghi");
//! assert_eq!(sid, "abc%2Bdef%2Fghi");
//! ```

/// URL encoding utilities for parameter safety.
pub mod url {
    /// URL-encode a parameter value.
    ///
    /// Spaces become `%20`; only unreserved characters are left as-is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ebay_signin_client::security::url;
    ///
    /// assert_eq!(url::encode_param("a b&c"), "a%20b%26c");
    /// ```
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// URL-encode a session id for eBay's sign-in page.
    ///
    /// The sign-in page reads a literal `+` as a space, so any `+` left after
    /// encoding is forced to `%2B`.
    #[must_use]
    pub fn encode_session_id(session_id: &str) -> String {
        encode_param(session_id).replace('+', "%2B")
    }
}

/// XML escaping utilities for Trading API request bodies.
pub mod xml {
    /// Escape a string for safe inclusion in XML content.
    ///
    /// This escapes the five predefined XML entities.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ebay_signin_client::security::xml;
    ///
    /// let safe = xml::escape("Hello <World> & 'Friends'");
    /// assert_eq!(safe, "Hello &lt;World&gt; &amp; &apos;Friends&apos;");
    /// ```
    #[must_use]
    pub fn escape(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }
}
