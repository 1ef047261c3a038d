use arena_mint::cli::tx::{Transaction, DEFAULT_DENOM, DEFAULT_MINT_AMOUNT};
use arena_mint::config::{
    Config, Procedure, Vars, PRIVATE_KEY_VAR, PUBLIC_ADDRESS_BACK_VAR, PUBLIC_ADDRESS_VAR,
};
use arena_mint::keys::PrivateKey;
use arena_mint::msg::{MsgMint, TokenFactoryMsg};
use arena_mint::network::{Network, NetworkKind};
use prost::Name;

const KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

fn receiver() -> String {
    PrivateKey::from_hex(&"5a".repeat(32))
        .unwrap()
        .address("inj")
        .unwrap()
}

fn vars(amount_override: &str) -> Vars {
    [
        (PRIVATE_KEY_VAR, KEY.to_owned()),
        (PUBLIC_ADDRESS_VAR, receiver()),
        (PUBLIC_ADDRESS_BACK_VAR, receiver()),
        // not a variable the tool reads; must not influence the amount
        ("INJECTIVE_MINT_AMOUNT", amount_override.to_owned()),
    ]
    .into_iter()
    .collect()
}

#[test]
fn mint_builds_exactly_one_expected_message() {
    let config = Config::load(
        &vars("1"),
        Network::builtin(NetworkKind::Testnet).unwrap(),
        Procedure::Mint,
    )
    .unwrap();

    let tx = Transaction::Mint {
        amount: DEFAULT_MINT_AMOUNT,
        denom: DEFAULT_DENOM.into(),
    };
    let msg = tx.build(&config).unwrap();

    let expected_sender = PrivateKey::from_hex(KEY).unwrap().address("inj").unwrap();
    let TokenFactoryMsg::Mint(mint) = &msg else {
        panic!("expected a mint message, got {msg:?}");
    };
    assert_eq!(mint.sender, expected_sender);
    assert_eq!(mint.receiver, receiver());
    let amount = mint.amount.as_ref().unwrap();
    assert_eq!(amount.denom, "factory/inj1haezurx6zaf43frdzegku4rwjcj9nc96hde3dp/arena_test");
    assert_eq!(amount.amount, "10000000000000000000");

    let any = msg.to_any().unwrap();
    assert_eq!(any.type_url, MsgMint::type_url());
    assert_eq!(any.to_msg::<MsgMint>().unwrap(), *mint);
}

#[test]
fn both_procedures_share_sender_and_denom() {
    let network = Network::builtin(NetworkKind::Testnet).unwrap();
    let mint_config = Config::load(&vars("1"), network.clone(), Procedure::Mint).unwrap();
    let admin_config = Config::load(&vars("1"), network, Procedure::ChangeAdmin).unwrap();

    let mint = Transaction::Mint {
        amount: DEFAULT_MINT_AMOUNT,
        denom: DEFAULT_DENOM.into(),
    }
    .build(&mint_config)
    .unwrap();
    let change_admin = Transaction::ChangeAdmin {
        denom: DEFAULT_DENOM.into(),
    }
    .build(&admin_config)
    .unwrap();

    assert_eq!(mint.sender(), change_admin.sender());

    match (mint, change_admin) {
        (TokenFactoryMsg::Mint(mint), TokenFactoryMsg::ChangeAdmin(change_admin)) => {
            assert_eq!(mint.amount.unwrap().denom, change_admin.denom);
            assert_eq!(change_admin.new_admin, receiver());
        }
        other => panic!("unexpected messages {other:?}"),
    }
}

#[tokio::test]
async fn dry_run_needs_no_network() {
    let mut network = Network::builtin(NetworkKind::Local).unwrap();
    network.rpc_endpoint = "http://127.0.0.1:1".into();
    let config = Config::load(&vars("1"), network, Procedure::Mint).unwrap();

    Transaction::Mint {
        amount: DEFAULT_MINT_AMOUNT,
        denom: DEFAULT_DENOM.into(),
    }
    .run(&config, true, 1.3, std::time::Duration::from_secs(1))
    .await
    .unwrap();
}
