use fractic_server_error::{define_client_error, define_internal_error};

// Configuration-related.
define_client_error!(InvalidConfig, "Invalid client configuration: {details}.", { details: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(WriteError, "Error writing file '{path}'.", { path: &str });
define_internal_error!(
    StorageUnavailable,
    "Client storage is unavailable: {details}.",
    { details: &str }
);

// Session-related.
define_client_error!(InvalidToken, "Invalid session token: {details}.", { details: &str });

// Request pipeline.
define_client_error!(SessionExpired, "Login session has expired, please log in again.");
define_client_error!(Unauthorized, "Unauthorized, please log in again.");
define_client_error!(BusinessError, "{msg}", { msg: &str });
define_client_error!(RequestFailed, "{msg}", { msg: &str });
define_client_error!(RequestTimeout, "Request timed out, please try again later.");
define_client_error!(
    NetworkError,
    "Network connection failed, please check network settings."
);
define_internal_error!(
    InvalidResponse,
    "Unexpected response from server: {details}.",
    { details: &str }
);
