use anyhow::{anyhow, Result};

pub fn validate_warhit_limits(default_limit: usize, max_limit: usize) -> Result<()> {
    if max_limit == 0 {
        return Err(anyhow!("max_warhit_limit must be greater than 0"));
    }
    if default_limit > max_limit {
        return Err(anyhow!(
            "default_warhit_limit ({}) must not exceed max_warhit_limit ({})",
            default_limit,
            max_limit
        ));
    }
    Ok(())
}
