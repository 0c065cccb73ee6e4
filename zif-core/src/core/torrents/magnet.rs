use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::{trace, warn};
use thiserror::Error;
use url::Url;

const MAGNET_SCHEME: &str = "magnet";
const BTIH_PREFIX: &str = "urn:btih:";
const HEX_INFO_HASH_LEN: usize = 40;
const BASE32_INFO_HASH_LEN: usize = 32;

type Result<T> = std::result::Result<T, MagnetError>;

/// Represents possible errors that can occur when parsing a magnet URI.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MagnetError {
    /// Failed to parse the magnet URI.
    #[error("failed to parse magnet uri, {0}")]
    Parse(String),
    /// The magnet URI doesn't contain a BitTorrent exact topic.
    #[error("magnet uri doesn't contain a valid info hash")]
    MissingInfoHash,
    /// The given value is not a valid info hash.
    #[error("info hash \"{0}\" is invalid")]
    InvalidInfoHash(String),
    /// The specified scheme in the magnet URI is not supported.
    #[error("scheme \"{0}\" is not supported")]
    UnsupportedScheme(String),
}

/// A parsed magnet link which identifies a single torrent by its info hash.
#[derive(Debug, Clone, PartialEq)]
pub struct Magnet {
    /// The lowercase hex v1 info hash of the torrent.
    pub info_hash: String,
    pub display_name: Option<String>,
    pub trackers: Vec<String>,
    uri: String,
}

impl Magnet {
    /// Parse a stream identifier which is either a magnet uri or a bare info hash.
    /// A bare info hash is converted into a minimal magnet uri.
    pub fn parse_identifier(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(MagnetError::Parse("identifier is empty".to_string()));
        }

        if value
            .get(..MAGNET_SCHEME.len() + 1)
            .filter(|e| e.eq_ignore_ascii_case("magnet:"))
            .is_some()
        {
            Self::from_str(value)
        } else {
            Self::from_info_hash(value)
        }
    }

    /// Create a new magnet from the given hex or base32 info hash.
    pub fn from_info_hash(info_hash: &str) -> Result<Self> {
        let info_hash = normalize_info_hash(info_hash)?;
        Ok(Self {
            uri: format!("{}:?xt={}{}", MAGNET_SCHEME, BTIH_PREFIX, info_hash),
            info_hash,
            display_name: None,
            trackers: vec![],
        })
    }

    /// Returns the magnet uri as it should be passed to the torrent engine.
    pub fn uri(&self) -> &str {
        self.uri.as_str()
    }

    /// Check if the given uri contains an encoded `&` as `&amp`.
    fn contains_encoded_ampersand(uri: &str) -> bool {
        uri.contains("&amp;")
    }
}

impl FromStr for Magnet {
    type Err = MagnetError;

    fn from_str(uri: &str) -> Result<Self> {
        let mut uri = uri.trim().to_string();

        // replace any encoded ampersands
        if Self::contains_encoded_ampersand(uri.as_str()) {
            uri = uri.replace("&amp;", "&");
        }

        let url = Url::parse(&uri).map_err(|e| MagnetError::Parse(e.to_string()))?;
        let scheme = url.scheme();
        if scheme != MAGNET_SCHEME {
            return Err(MagnetError::UnsupportedScheme(scheme.to_string()));
        }

        let mut info_hash = None;
        let mut display_name = None;
        let mut trackers = Vec::new();
        for (key, value) in url.query_pairs() {
            match key.to_lowercase().as_str() {
                "xt" => {
                    if info_hash.is_some() {
                        continue;
                    }

                    match value.get(..BTIH_PREFIX.len()) {
                        Some(prefix) if prefix.eq_ignore_ascii_case(BTIH_PREFIX) => {
                            info_hash =
                                Some(normalize_info_hash(&value[BTIH_PREFIX.len()..])?);
                        }
                        _ => trace!("Ignoring magnet exact topic {}", value),
                    }
                }
                "dn" => display_name = Some(value.to_string()),
                "tr" => trackers.push(value.to_string()),
                _ => warn!("Unsupported magnet parameter {}", key),
            }
        }

        Ok(Self {
            info_hash: info_hash.ok_or(MagnetError::MissingInfoHash)?,
            display_name,
            trackers,
            uri,
        })
    }
}

impl Display for Magnet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri)
    }
}

/// Normalize the given hex or base32 info hash into its lowercase hex representation.
pub fn normalize_info_hash(value: &str) -> Result<String> {
    let value = value.trim();

    match value.len() {
        HEX_INFO_HASH_LEN if value.chars().all(|e| e.is_ascii_hexdigit()) => {
            Ok(value.to_ascii_lowercase())
        }
        BASE32_INFO_HASH_LEN => base32::decode(
            base32::Alphabet::Rfc4648 { padding: false },
            &value.to_ascii_uppercase(),
        )
        .filter(|bytes| bytes.len() == HEX_INFO_HASH_LEN / 2)
        .map(|bytes| bytes.iter().map(|e| format!("{:02x}", e)).collect())
        .ok_or_else(|| MagnetError::InvalidInfoHash(value.to_string())),
        _ => Err(MagnetError::InvalidInfoHash(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use crate::init_logger;

    use super::*;

    const DEBIAN_MAGNET: &str = "magnet:?xt=urn:btih:EADAF0EFEA39406914414D359E0EA16416409BD7&dn=debian-12.4.0-amd64-DVD-1.iso&tr=udp%3A%2F%2Ftracker.opentrackr.org%3A1337&tr=udp%3A%2F%2Fopen.stealth.si%3A80%2Fannounce";

    #[test]
    fn test_magnet_from_str() {
        init_logger!();
        let expected_result = Magnet {
            info_hash: "eadaf0efea39406914414d359e0ea16416409bd7".to_string(),
            display_name: Some("debian-12.4.0-amd64-DVD-1.iso".to_string()),
            trackers: vec![
                "udp://tracker.opentrackr.org:1337".to_string(),
                "udp://open.stealth.si:80/announce".to_string(),
            ],
            uri: DEBIAN_MAGNET.to_string(),
        };

        let result = Magnet::from_str(DEBIAN_MAGNET).unwrap();

        assert_eq!(expected_result, result);
    }

    #[test]
    fn test_magnet_from_str_encoded_url() {
        init_logger!();
        let uri = DEBIAN_MAGNET.replace("&", "&amp;");

        let result = Magnet::from_str(uri.as_str()).unwrap();

        assert_eq!("eadaf0efea39406914414d359e0ea16416409bd7", result.info_hash);
        assert_eq!(DEBIAN_MAGNET, result.uri());
    }

    #[test]
    fn test_magnet_from_str_invalid_scheme() {
        init_logger!();
        let uri = "custom:?xt=urn:btih:EADAF0EFEA39406914414D359E0EA16416409BD7";

        let result = Magnet::from_str(uri);

        assert_eq!(
            Err(MagnetError::UnsupportedScheme("custom".to_string())),
            result
        );
    }

    #[test]
    fn test_magnet_from_str_missing_info_hash() {
        init_logger!();
        let uri = "magnet:?dn=lorem.mkv";

        let result = Magnet::from_str(uri);

        assert_eq!(Err(MagnetError::MissingInfoHash), result);
    }

    #[test]
    fn test_parse_identifier_hex_info_hash() {
        init_logger!();
        let result = Magnet::parse_identifier("EADAF0EFEA39406914414D359E0EA16416409BD7").unwrap();

        assert_eq!("eadaf0efea39406914414d359e0ea16416409bd7", result.info_hash);
        assert_eq!(
            "magnet:?xt=urn:btih:eadaf0efea39406914414d359e0ea16416409bd7",
            result.uri()
        );
    }

    #[test]
    fn test_parse_identifier_base32_info_hash() {
        init_logger!();
        // 19 zero bytes followed by 0x01
        let result = Magnet::parse_identifier("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAB").unwrap();

        assert_eq!("0000000000000000000000000000000000000001", result.info_hash);
    }

    #[test]
    fn test_parse_identifier_invalid() {
        init_logger!();

        assert_eq!(
            Err(MagnetError::InvalidInfoHash("lorem ipsum".to_string())),
            Magnet::parse_identifier("lorem ipsum")
        );
        assert_eq!(
            Err(MagnetError::Parse("identifier is empty".to_string())),
            Magnet::parse_identifier("   ")
        );
    }
}
