use async_trait::async_trait;
use ethereum_types::Address;
use mockall::mock;
use timelock_core::{
    error::{Error, Result},
    BlockTag, ChainClient, LogId, RawLogEntry, ReturnValues,
};
use timelock_events::EventPipeline;

mock! {
    pub Chain {}

    #[async_trait]
    impl ChainClient for Chain {
        fn contract_address(&self) -> Address;
        async fn admin(&self) -> Result<Address>;
        async fn guardian(&self) -> Result<Address>;
        async fn get_past_events(&self, from_block: u64, to_block: BlockTag) -> Result<Vec<RawLogEntry>>;
    }
}

fn new_admin_log(block_number: u64, id: u64) -> RawLogEntry {
    RawLogEntry {
        id: LogId::from(id),
        block_number,
        transaction_hash: None,
        event: Some("NewAdmin".to_string()),
        return_values: ReturnValues {
            signature: None,
            data: Vec::new(),
            fields: vec![("newAdmin".to_string(), "0x0000000000000000000000000000000000000001".to_string())],
        },
    }
}

#[tokio::test]
async fn queries_full_history_once() {
    let mut chain = MockChain::new();
    chain.expect_admin().times(1).returning(|| Ok(Address::repeat_byte(7)));
    chain
        .expect_guardian()
        .times(1)
        .returning(|| Err(Error::RpcError("connection refused".into())));
    chain
        .expect_get_past_events()
        .withf(|from, to| *from == 0 && *to == BlockTag::Latest)
        .times(1)
        .returning(|_, _| Ok(vec![new_admin_log(3, 0), new_admin_log(9, 4)]));

    let snapshot = EventPipeline::new(chain).run().await;

    let events = snapshot.events.expect("events");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].block_number(), 9);
    assert_eq!(events[0].event_name(), "NewAdmin");
    assert_eq!(events[0].raw.return_values.get("newAdmin"), Some("0x0000000000000000000000000000000000000001"));
    assert_eq!(snapshot.state.admin, Some(Address::repeat_byte(7)));
    assert_eq!(snapshot.state.guardian, None);
}
