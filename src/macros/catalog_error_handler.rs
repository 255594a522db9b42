/// unwrap the result of a catalog call inside a route, or return the http
/// status that matches the error. caller mistakes are logged as warnings,
/// everything else as errors.
macro_rules! api_handle_error_http {
    ( $data:expr, $target:expr, $type_str:expr) => {
        match $data {
            Ok(e) => e,
            Err(error) if error.is_client_error() => {
                log::warn!(target:$target, "Could not get {}. (error: {})", $type_str, error);
                return Err(error.status());
            }
            Err(error) => {
                log::error!(target:$target, "Error getting {}. (error: {})", $type_str, error);
                return Err(error.status());
            }
        }
    }
}

pub(crate) use api_handle_error_http;
