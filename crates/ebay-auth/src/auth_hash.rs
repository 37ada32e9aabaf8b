//! Normalized identity handed to the host framework.

use ebay_signin_trading::{AuthToken, UserProfile};
use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};
use crate::options::DEFAULT_NAME;

/// Identity produced by a successful callback phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthHash {
    /// Strategy name.
    pub provider: String,
    /// `EIASToken`, eBay's stable user identifier.
    pub uid: String,
    /// Profile fields.
    pub info: UserInfo,
    /// Token obtained during the exchange.
    pub credentials: AuthCredentials,
    /// Return location and the untouched profile.
    pub extra: Extra,
}

/// Profile fields read from the `User` element.
#[derive(Clone, PartialEq, Serialize)]
pub struct UserInfo {
    /// `UserID`
    pub ebay_id: Option<String>,
    /// The user's auth token.
    pub ebay_token: String,
    /// `Email`
    pub email: Option<String>,
    /// `RegistrationAddress.Name`
    pub full_name: Option<String>,
    /// `RegistrationAddress.Country`
    pub country: Option<String>,
}

impl std::fmt::Debug for UserInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserInfo")
            .field("ebay_id", &self.ebay_id)
            .field("ebay_token", &"[REDACTED]")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("country", &self.country)
            .finish()
    }
}

/// Credentials section of the identity.
#[derive(Clone, PartialEq, Serialize)]
pub struct AuthCredentials {
    /// The user's auth token.
    pub token: String,
}

impl std::fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Extra section of the identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extra {
    /// Where the host wanted to send the user, if it said so.
    pub internal_return_to: Option<String>,
    /// The whole `User` element.
    pub raw_info: UserProfile,
}

impl AuthHash {
    /// Project a fetched profile into an identity under the default provider
    /// name.
    ///
    /// Fails with [`ErrorKind::InvalidProfile`] when the profile has no
    /// `EIASToken`.
    pub fn from_profile(
        profile: UserProfile,
        auth_token: &AuthToken,
        internal_return_to: Option<&str>,
    ) -> Result<Self> {
        Self::for_provider(DEFAULT_NAME, profile, auth_token, internal_return_to)
    }

    /// Project a fetched profile into an identity under a given provider name.
    pub fn for_provider(
        provider: impl Into<String>,
        profile: UserProfile,
        auth_token: &AuthToken,
        internal_return_to: Option<&str>,
    ) -> Result<Self> {
        let uid = profile
            .eias_token()
            .filter(|uid| !uid.trim().is_empty())
            .ok_or_else(|| {
                Error::new(ErrorKind::InvalidProfile(
                    "EIASToken is missing".to_string(),
                ))
            })?
            .to_string();

        let owned = |value: Option<&str>| value.map(str::to_string);

        let info = UserInfo {
            ebay_id: owned(profile.user_id()),
            ebay_token: auth_token.as_str().to_string(),
            email: owned(profile.email()),
            full_name: owned(profile.full_name()),
            country: owned(profile.country()),
        };

        Ok(Self {
            provider: provider.into(),
            uid,
            info,
            credentials: AuthCredentials {
                token: auth_token.as_str().to_string(),
            },
            extra: Extra {
                internal_return_to: owned(internal_return_to),
                raw_info: profile,
            },
        })
    }
}
