use sagal_app::{
    config::ClientConfig,
    connectivity::ConnectionStatus,
    status::{HttpStatusService, StatusService},
};

#[expect(clippy::print_stdout, reason = "the probe result is the command's output")]
pub(crate) async fn run(config: &ClientConfig) -> Result<(), String> {
    let client = config
        .api
        .client()
        .map_err(|error| format!("failed to build API client: {error}"))?;

    let base_url = client.config().base_url.clone();
    let service = HttpStatusService::new(client);

    match service.health().await {
        Ok(report) => {
            println!("{}: {base_url}", ConnectionStatus::Connected.label());

            if let Some(status) = report.status {
                println!("status: {status}");
            }

            Ok(())
        }
        Err(error) => Err(format!(
            "{}: {base_url}: {error}",
            ConnectionStatus::Offline.label()
        )),
    }
}
