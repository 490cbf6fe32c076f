//! Tests for operation mode determination.

use rstest::rstest;

use crate::BlockadeConfig;
use crate::config::OperationMode;

fn config_with(search: bool, block: bool, unblock: bool) -> BlockadeConfig {
    BlockadeConfig {
        search: search.then(|| "ann".to_owned()),
        block: block.then(|| "12".to_owned()),
        unblock: unblock.then(|| "40".to_owned()),
        ..Default::default()
    }
}

#[rstest]
#[case::nothing(false, false, false, OperationMode::Show)]
#[case::search(true, false, false, OperationMode::Search)]
#[case::block(false, true, false, OperationMode::Block)]
#[case::unblock(false, false, true, OperationMode::Unblock)]
#[case::block_beats_search(true, true, false, OperationMode::Block)]
#[case::unblock_beats_search(true, false, true, OperationMode::Unblock)]
fn operation_mode_follows_action_flags(
    #[case] search: bool,
    #[case] block: bool,
    #[case] unblock: bool,
    #[case] expected: OperationMode,
) {
    assert_eq!(config_with(search, block, unblock).operation_mode(), expected);
}

#[rstest]
fn operation_mode_ignores_connection_fields() {
    let config = BlockadeConfig {
        api_url: Some("https://daemo.example/api/".to_owned()),
        token: Some("token".to_owned()),
        notify: true,
        ..Default::default()
    };

    assert_eq!(
        config.operation_mode(),
        OperationMode::Show,
        "connection fields should not affect operation mode"
    );
}
