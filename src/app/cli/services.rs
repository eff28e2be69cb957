use crate::domain::AppError;

pub fn run_services() -> Result<(), AppError> {
    let services = crate::app::api::services()?;

    println!("Available services:");
    for service in services {
        let prefix = service.prefix.as_deref().unwrap_or("-");
        let vcap = if service.cloud_foundry_is_array { " [VCAP array]" } else { "" };
        println!("  {} ({}) - {}{}", service.key, prefix, service.summary, vcap);
    }
    Ok(())
}
