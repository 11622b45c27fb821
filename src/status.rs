use std::num::NonZeroU16;

use fnv::FnvHashMap;
use once_cell::sync::Lazy;

use crate::class::Class;

/// HTTP [Status Code][rfc].
///
/// Every standard status code is exposed as an associated constant,
/// including the WebDAV codes from [RFC 4918] and the registered
/// extension codes. Arbitrary code is not supported.
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#name-status-codes>
/// [RFC 4918]: <https://datatracker.ietf.org/doc/html/rfc4918>
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(NonZeroU16);

impl Default for StatusCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

macro_rules! status_codes {
    (
        $(
            $(#[$doc:meta])*
            $int:literal $id:ident;
        )*
    ) => {
        impl StatusCode {
            /// Returns status code value, e.g: `200`.
            #[inline]
            pub const fn status(&self) -> u16 {
                self.0.get()
            }

            /// Returns status code as str, e.g: `"200"`.
            #[inline]
            pub const fn as_str(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => stringify!($int),
                    )*
                    // SAFETY: StatusCode value is privately constructed and immutable
                    _ => unsafe { std::hint::unreachable_unchecked() },
                }
            }

            /// Returns the constant name, e.g: `"NOT_FOUND"`.
            #[inline]
            pub const fn name(&self) -> &'static str {
                match self.0.get() {
                    $(
                        $int => stringify!($id),
                    )*
                    // SAFETY: StatusCode value is privately constructed and immutable
                    _ => unsafe { std::hint::unreachable_unchecked() },
                }
            }

            /// Create [`StatusCode`] from a known numeric value.
            ///
            /// Returns `None` if the value is not a registered status code.
            #[inline]
            pub const fn from_u16(src: u16) -> Option<StatusCode> {
                match src {
                    $(
                        $int => Some(Self::$id),
                    )*
                    _ => None,
                }
            }

            /// Create [`StatusCode`] from a constant name, e.g: `"NOT_FOUND"`.
            ///
            /// Names are matched exactly; returns `None` for anything outside
            /// the known set.
            #[inline]
            pub fn from_name(src: &str) -> Option<StatusCode> {
                BY_NAME.get(src).copied()
            }
        }

        impl StatusCode {
            $(
                $(#[$doc])*
                pub const $id: Self = Self(NonZeroU16::new($int).unwrap());
            )*
        }

        static BY_NAME: Lazy<FnvHashMap<&'static str, StatusCode>> = Lazy::new(|| {
            FnvHashMap::from_iter([
                $(
                    (stringify!($id), StatusCode::$id),
                )*
            ])
        });
    };
}

status_codes! {
    // ===== Informational =====

    /// `100`. This interim response indicates that the client should continue the request or
    /// ignore the response if the request is already finished.
    100 CONTINUE;
    /// `101`. This code is sent in response to an `Upgrade` request header from the client and
    /// indicates the protocol the server is switching to.
    101 SWITCHING_PROTOCOLS;
    /// `102`. The server has received and is processing the request, but no response is available
    /// yet. Defined by WebDAV.
    102 PROCESSING;

    // ===== Success =====

    /// `200`. The request succeeded.
    200 OK;
    /// `201`. The request succeeded, and a new resource was created as a result.
    201 CREATED;
    /// `202`. The request has been received but not yet acted upon. It is noncommittal, since
    /// there is no way in HTTP to later send an asynchronous response indicating the outcome.
    202 ACCEPTED;
    /// `203`. The returned metadata is not exactly the same as is available from the origin
    /// server, but is collected from a local or a third-party copy.
    203 NON_AUTHORITATIVE_INFORMATION;
    /// `204`. There is no content to send for this request, but the headers are useful.
    204 NO_CONTENT;
    /// `205`. Tells the user agent to reset the document which sent this request.
    205 RESET_CONTENT;
    /// `206`. This response code is used in response to a range request when the client has
    /// requested a part or parts of a resource.
    206 PARTIAL_CONTENT;
    /// `207`. Conveys information about multiple resources, for situations where multiple status
    /// codes might be appropriate. Defined by WebDAV.
    207 MULTI_STATUS;
    /// `208`. Used inside a WebDAV `propstat` response element to avoid repeatedly enumerating
    /// the internal members of multiple bindings to the same collection.
    208 ALREADY_REPORTED;
    /// `226`. The server has fulfilled a GET request for the resource, and the response is a
    /// representation of the result of one or more instance-manipulations.
    226 IM_USED;

    // ===== Redirection =====

    /// `300`. The request has more than one possible response and the user agent should choose
    /// one of them.
    300 MULTIPLE_CHOICES;
    /// `301`. The URL of the requested resource has been changed permanently. The new URL is
    /// given in the response.
    301 MOVED_PERMANENTLY;
    /// `302`. This response code means that the URI of requested resource has been changed
    /// temporarily.
    302 FOUND;
    /// `303`. The server sent this response to direct the client to get the requested resource at
    /// another URI with a GET request.
    303 SEE_OTHER;
    /// `304`. This is used for caching purposes. It tells the client that the response has not
    /// been modified, so the client can continue to use the same cached version of the response.
    304 NOT_MODIFIED;
    /// `305`. Deprecated. Indicated that a requested response must be accessed by a proxy.
    305 USE_PROXY;
    /// `306`. No longer used, but reserved. Originally meant that subsequent requests should use
    /// the specified proxy.
    306 SWITCH_PROXY;
    /// `307`. The server sends this response to direct the client to get the requested resource
    /// at another URI with the same method that was used in the prior request.
    307 TEMPORARY_REDIRECT;
    /// `308`. This means that the resource is now permanently located at another URI. The client
    /// must not change the HTTP method used in the original request.
    308 PERMANENT_REDIRECT;

    // ===== Client Error =====

    /// `400`. The server cannot or will not process the request due to something that is
    /// perceived to be a client error.
    400 BAD_REQUEST;
    /// `401`. Although the HTTP standard specifies "unauthorized", semantically this response
    /// means "unauthenticated".
    401 UNAUTHORIZED;
    /// `402`. Reserved for future use. The initial aim was to use it for digital payment systems,
    /// however it is rarely used and no standard convention exists.
    402 PAYMENT_REQUIRED;
    /// `403`. The client's identity is known to the server, but client does not have access
    /// rights to the content.
    403 FORBIDDEN;
    /// `404`. The server cannot find the requested resource.
    404 NOT_FOUND;
    /// `405`. The request method is known by the server but is not supported by the target
    /// resource.
    405 METHOD_NOT_ALLOWED;
    /// `406`. This response is sent when the web server, after performing server-driven content
    /// negotiation, doesn't find any content that conforms to the criteria given by the user
    /// agent.
    406 NOT_ACCEPTABLE;
    /// `407`. This is similar to `401 Unauthorized` but authentication is needed to be done by a
    /// proxy.
    407 PROXY_AUTHENTICATION_REQUIRED;
    /// `408`. This response is sent on an idle connection by some servers, even without any
    /// previous request by the client. It means that the server would like to shut down this
    /// unused connection.
    408 REQUEST_TIMEOUT;
    /// `409`. This response is sent when a request conflicts with the current state of the
    /// server.
    409 CONFLICT;
    /// `410`. This response is sent when the requested content has been permanently deleted from
    /// server, with no forwarding address.
    410 GONE;
    /// `411`. Server rejected the request because the `Content-Length` header field is not
    /// defined and the server requires it.
    411 LENGTH_REQUIRED;
    /// `412`. In conditional requests, the client has indicated preconditions in its headers
    /// which the server does not meet.
    412 PRECONDITION_FAILED;
    /// `413`. The request body is larger than limits defined by server.
    413 PAYLOAD_TOO_LARGE;
    /// `414`. The URI requested by the client is longer than the server is willing to interpret.
    414 URI_TOO_LONG;
    /// `415`. The media format of the requested data is not supported by the server, so the
    /// server is rejecting the request.
    415 UNSUPPORTED_MEDIA_TYPE;
    /// `416`. The ranges specified by the `Range` header field in the request cannot be
    /// fulfilled.
    416 RANGE_NOT_SATISFIABLE;
    /// `417`. This response code means the expectation indicated by the `Expect` request header
    /// field cannot be met by the server.
    417 EXPECTATION_FAILED;
    /// `418`. The server refuses the attempt to brew coffee with a teapot.
    418 I_AM_A_TEAPOT;
    /// `421`. The request was directed at a server that is not able to produce a response.
    421 MISDIRECTED_REQUEST;
    /// `422`. The request was well-formed but was unable to be followed due to semantic errors.
    /// Defined by WebDAV.
    422 UNPROCESSABLE_ENTITY;
    /// `423`. The resource that is being accessed is locked. Defined by WebDAV.
    423 LOCKED;
    /// `424`. The request failed due to failure of a previous request. Defined by WebDAV.
    424 FAILED_DEPENDENCY;
    /// `426`. The server refuses to perform the request using the current protocol but might be
    /// willing to do so after the client upgrades to a different protocol.
    426 UPGRADE_REQUIRED;
    /// `428`. The origin server requires the request to be conditional.
    428 PRECONDITION_REQUIRED;
    /// `429`. The user has sent too many requests in a given amount of time
    /// ([rate limiting][1]).
    ///
    /// [1]: <https://developer.mozilla.org/en-US/docs/Glossary/Rate_limit>
    429 TOO_MANY_REQUESTS;
    /// `431`. The server is unwilling to process the request because its header fields are too
    /// large. The request may be resubmitted after reducing the size of the request header
    /// fields.
    431 REQUEST_HEADER_FIELDS_TOO_LARGE;
    /// `451`. The user agent requested a resource that cannot legally be provided, such as a web
    /// page censored by a government.
    451 UNAVAILABLE_FOR_LEGAL_REASONS;

    // ===== Server Error =====

    /// `500`. The server has encountered a situation it does not know how to handle.
    500 INTERNAL_SERVER_ERROR;
    /// `501`. The request method is not supported by the server and cannot be handled.
    501 NOT_IMPLEMENTED;
    /// `502`. This error response means that the server, while working as a gateway to get a
    /// response needed to handle the request, got an invalid response.
    502 BAD_GATEWAY;
    /// `503`. The server is not ready to handle the request.
    ///
    /// Common causes are a server that is down for maintenance or that is overloaded.
    503 SERVICE_UNAVAILABLE;
    /// `504`. This error response is given when the server is acting as a gateway and cannot get
    /// a response in time.
    504 GATEWAY_TIMEOUT;
    /// `505`. The HTTP version used in the request is not supported by the server.
    505 HTTP_VERSION_NOT_SUPPORTED;
    /// `506`. The server has an internal configuration error: the chosen variant resource is
    /// configured to engage in transparent content negotiation itself, and is therefore not a
    /// proper end point in the negotiation process.
    506 VARIANT_ALSO_NEGOTIATES;
    /// `507`. The server is unable to store the representation needed to complete the request.
    /// Defined by WebDAV.
    507 INSUFFICIENT_STORAGE;
    /// `508`. The server detected an infinite loop while processing the request. Defined by
    /// WebDAV.
    508 LOOP_DETECTED;
    /// `510`. Further extensions to the request are required for the server to fulfill it.
    510 NOT_EXTENDED;
    /// `511`. Indicates that the client needs to authenticate to gain network access.
    511 NETWORK_AUTHENTICATION_REQUIRED;
}

impl StatusCode {
    /// Returns the [`Class`] of the status code, based on its first digit.
    #[inline]
    pub const fn class(&self) -> Class {
        Class::of(self.0.get())
    }
}

impl std::str::FromStr for StatusCode {
    type Err = UnknownStatusName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(UnknownStatusName)
    }
}

impl From<StatusCode> for u16 {
    #[inline]
    fn from(status: StatusCode) -> u16 {
        status.status()
    }
}

impl PartialEq<u16> for StatusCode {
    #[inline]
    fn eq(&self, other: &u16) -> bool {
        self.0.get() == *other
    }
}

impl PartialEq<StatusCode> for u16 {
    #[inline]
    fn eq(&self, other: &StatusCode) -> bool {
        *self == other.0.get()
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("StatusCode").field(&self.name()).finish()
    }
}

// ===== Error =====

/// Error from resolving an unrecognized status code name.
pub struct UnknownStatusName;

impl std::error::Error for UnknownStatusName { }

impl std::fmt::Debug for UnknownStatusName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown status name")
    }
}

impl std::fmt::Display for UnknownStatusName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown status name")
    }
}
