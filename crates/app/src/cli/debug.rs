use sagal_app::{
    config::ClientConfig,
    status::{HttpStatusService, StatusService},
};

#[expect(clippy::print_stdout, reason = "diagnostics are the command's output")]
pub(crate) async fn run(config: &ClientConfig) -> Result<(), String> {
    let client = config
        .api
        .client()
        .map_err(|error| format!("failed to build API client: {error}"))?;

    let info = HttpStatusService::new(client)
        .debug()
        .await
        .map_err(|error| format!("failed to fetch diagnostics: {error}"))?;

    println!("message: {}", info.message.as_deref().unwrap_or("none"));
    println!("environment: {}", info.node_env().unwrap_or("unknown"));

    if let Some(environment) = &info.environment {
        for (key, value) in &environment.extra {
            println!("environment.{key}: {value}");
        }
    }

    for (key, value) in &info.extra {
        println!("{key}: {value}");
    }

    Ok(())
}
