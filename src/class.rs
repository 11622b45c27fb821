/// Status code class, the grouping given by the [first digit][rfc].
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Class {
    /// 1xx: the request was received, continuing process.
    Informational,
    /// 2xx: the request was successfully received, understood, and accepted.
    Success,
    /// 3xx: further action needs to be taken in order to complete the request.
    Redirection,
    /// 4xx: the request contains bad syntax or cannot be fulfilled.
    ClientError,
    /// 5xx: the server failed to fulfill an apparently valid request.
    ServerError,
    /// Anything outside the registered `100..=599` range.
    Unknown,
}

impl Class {
    /// Determine the class of a numeric value.
    ///
    /// Pure function over the whole `u16` range, values outside `100..=599`
    /// are [`Class::Unknown`].
    #[inline]
    pub const fn of(value: u16) -> Class {
        match value {
            100..=199 => Class::Informational,
            200..=299 => Class::Success,
            300..=399 => Class::Redirection,
            400..=499 => Class::ClientError,
            500..=599 => Class::ServerError,
            _ => Class::Unknown,
        }
    }

    /// Returns string representation of the class, e.g: `"Client Error"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Class::Informational => "Informational",
            Class::Success => "Success",
            Class::Redirection => "Redirection",
            Class::ClientError => "Client Error",
            Class::ServerError => "Server Error",
            Class::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_of() {
        for value in 100..600 {
            let expect = match value / 100 {
                1 => Class::Informational,
                2 => Class::Success,
                3 => Class::Redirection,
                4 => Class::ClientError,
                _ => Class::ServerError,
            };
            assert_eq!(Class::of(value), expect, "value {value}");
        }
        for value in (0..100).chain(600..=1000) {
            assert_eq!(Class::of(value), Class::Unknown, "value {value}");
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(Class::of(99), Class::Unknown);
        assert_eq!(Class::of(100), Class::Informational);
        assert_eq!(Class::of(199), Class::Informational);
        assert_eq!(Class::of(200), Class::Success);
        assert_eq!(Class::of(300), Class::Redirection);
        assert_eq!(Class::of(400), Class::ClientError);
        assert_eq!(Class::of(500), Class::ServerError);
        assert_eq!(Class::of(599), Class::ServerError);
        assert_eq!(Class::of(600), Class::Unknown);
        assert_eq!(Class::of(999), Class::Unknown);
        assert_eq!(Class::of(u16::MAX), Class::Unknown);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Class::of(204).as_str(), "Success");
        assert_eq!(Class::of(418).to_string(), "Client Error");
        assert_eq!(Class::of(999).to_string(), "Unknown");
    }
}
