use ink_core::{ParamsError, TrailParams};

/// Build parameters from `(key, value)` overrides applied on top of the
/// defaults. Fails on the first bad override or if the result does not validate.
pub fn params_from_overrides<'a, I>(overrides: I) -> Result<TrailParams, ParamsError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut params = TrailParams::default();
    for (key, value) in overrides {
        params.set(key, value)?;
    }
    params.validated()
}

/// Like [`params_from_overrides`] but falls back to the defaults on error.
pub fn resolve_params<'a, I>(overrides: I) -> TrailParams
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    match params_from_overrides(overrides) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("[config] ignoring ink overrides: {}", e);
            TrailParams::default()
        }
    }
}
