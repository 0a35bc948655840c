use anyhow::Context;
use timelock_core::utils::format_address;
use timelock_events::{EventPipeline, Slot};
use timelock_rpc::{RpcConfig, Web3ChainClient};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // TIMELOCK_RPC_ENDPOINT / TIMELOCK_CONTRACT_ADDRESS sobrescrevem os padrões
    let config = RpcConfig::from_env().context("configuração inválida")?;
    let client = Web3ChainClient::new(config)
        .await
        .context("falha ao criar cliente RPC")?;
    let pipeline = EventPipeline::new(client);

    let snapshot = pipeline.run().await;
    info!(failures = snapshot.failures.len(), "consulta concluída");

    let show = |address: Option<timelock_core::Address>| address.map(|a| format_address(&a)).unwrap_or_default();
    println!("Contract  {}", format_address(&pipeline.client().config().contract_address));
    println!("Admin     {}", show(snapshot.state.admin));
    println!("Guardian  {}", show(snapshot.state.guardian));
    println!();

    let Some(events) = snapshot.events.as_ref() else {
        if let Some(failure) = snapshot.failure(Slot::Events) {
            eprintln!("Eventos indisponíveis: {}", failure.message);
        }
        return Ok(());
    };

    println!("{:<14}{:<22}{}", "Block Number", "Event", "Action");
    for event in events {
        println!("{:<14}{:<22}{}", event.block_number(), event.event_name(), event.action_label());
        for (ty, value) in event.labeled_parameters() {
            println!("{:<36}{}: {}", "", ty, value);
        }
    }

    Ok(())
}
