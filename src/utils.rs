use rusoto_core::Region;

/// Resolves the AWS region for a client.
///
/// A custom endpoint takes priority, otherwise the named region is used and
/// finally the region is taken from the environment.
pub fn resolve_region(region: Option<&str>, endpoint: Option<&str>) -> anyhow::Result<Region> {
    match (region, endpoint) {
        (name, Some(endpoint)) => Ok(Region::Custom {
            name: name.unwrap_or("us-east-1").to_string(),
            endpoint: endpoint.to_string(),
        }),
        (Some(name), None) => Ok(name.parse::<Region>()?),
        (None, None) => Ok(Region::default()),
    }
}
