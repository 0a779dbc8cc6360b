//! Digest identification for the `type` argument of `rsa_sign`.
//!
//! libcrypto passes the digest algorithm as an object NID. The bridge never
//! validates the digest against it; the mapping only feeds diagnostics.

use std::os::raw::c_int;

use openssl_sys::{NID_md5, NID_sha1, NID_sha224, NID_sha256, NID_sha384, NID_sha512, NID_undef};

/// `NID_md5_sha1`, the concatenated digest used by TLS 1.0/1.1 signatures.
pub const NID_MD5_SHA1: c_int = 114;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestKind {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Md5Sha1,
}

impl DigestKind {
    /// Maps an OpenSSL NID to a known digest. `NID_undef` and anything
    /// unrecognised yield `None`.
    #[allow(non_upper_case_globals)]
    pub fn from_nid(nid: c_int) -> Option<Self> {
        match nid {
            NID_undef => None,
            NID_md5 => Some(DigestKind::Md5),
            NID_sha1 => Some(DigestKind::Sha1),
            NID_sha224 => Some(DigestKind::Sha224),
            NID_sha256 => Some(DigestKind::Sha256),
            NID_sha384 => Some(DigestKind::Sha384),
            NID_sha512 => Some(DigestKind::Sha512),
            NID_MD5_SHA1 => Some(DigestKind::Md5Sha1),
            _ => None,
        }
    }

    pub fn nid(self) -> c_int {
        match self {
            DigestKind::Md5 => NID_md5,
            DigestKind::Sha1 => NID_sha1,
            DigestKind::Sha224 => NID_sha224,
            DigestKind::Sha256 => NID_sha256,
            DigestKind::Sha384 => NID_sha384,
            DigestKind::Sha512 => NID_sha512,
            DigestKind::Md5Sha1 => NID_MD5_SHA1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DigestKind::Md5 => "MD5",
            DigestKind::Sha1 => "SHA1",
            DigestKind::Sha224 => "SHA224",
            DigestKind::Sha256 => "SHA256",
            DigestKind::Sha384 => "SHA384",
            DigestKind::Sha512 => "SHA512",
            DigestKind::Md5Sha1 => "MD5-SHA1",
        }
    }

    /// Output size in bytes.
    pub fn digest_len(self) -> u32 {
        match self {
            DigestKind::Md5 => 16,
            DigestKind::Sha1 => 20,
            DigestKind::Sha224 => 28,
            DigestKind::Sha256 => 32,
            DigestKind::Sha384 => 48,
            DigestKind::Sha512 => 64,
            DigestKind::Md5Sha1 => 36,
        }
    }
}
