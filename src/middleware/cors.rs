use actix_cors::Cors;

/// Wide-open CORS: any origin, method and header, with credentials.
///
/// With credentials enabled the `Access-Control-Allow-Origin` header echoes the
/// caller's origin instead of `*`. Only suitable for non-production use.
pub fn permissive() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}
