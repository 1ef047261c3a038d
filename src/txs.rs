use cosmos_sdk_proto::cosmos::base::v1beta1::Coin;
use cosmos_sdk_proto::cosmos::tx::signing::v1beta1::SignMode;
use cosmos_sdk_proto::cosmos::tx::v1beta1::{
    mode_info::{Single, Sum},
    AuthInfo, Fee, ModeInfo, SignDoc, SignerInfo, TxBody, TxRaw,
};
use cosmos_sdk_proto::Any;
use prost::{Message, Name};
use secp256k1::PublicKey;

use crate::keys::PrivateKey;
use crate::Result;

/// Injective account public key (`ethsecp256k1`), compressed SEC1 bytes.
#[derive(Clone, PartialEq, prost::Message)]
pub struct EthSecp256k1PubKey {
    #[prost(bytes = "vec", tag = "1")]
    pub key: Vec<u8>,
}

impl Name for EthSecp256k1PubKey {
    const NAME: &'static str = "PubKey";
    const PACKAGE: &'static str = "injective.crypto.v1beta1.ethsecp256k1";
}

pub fn generate_tx_body(any_msgs: &[Any], memo: &str) -> TxBody {
    TxBody {
        messages: any_msgs.to_vec(),
        memo: memo.into(),
        ..Default::default()
    }
}

pub fn generate_fee(gas: u64, fee_amount: u128, fee_denom: &str) -> Fee {
    let amount = if fee_amount > 0 {
        vec![Coin {
            denom: fee_denom.into(),
            amount: fee_amount.to_string(),
        }]
    } else {
        vec![]
    };

    Fee {
        amount,
        gas_limit: gas,
        payer: "".into(),
        granter: "".into(),
    }
}

pub fn generate_auth_info(public_key: &PublicKey, sequence: u64, fee: Fee) -> Result<AuthInfo> {
    let mode_info = ModeInfo {
        sum: Some(Sum::Single(Single {
            mode: SignMode::Direct.into(),
        })),
    };

    let signer_info = SignerInfo {
        public_key: Some(Any::from_msg(&EthSecp256k1PubKey {
            key: public_key.serialize().to_vec(),
        })?),
        mode_info: Some(mode_info),
        sequence,
    };

    Ok(AuthInfo {
        signer_infos: vec![signer_info],
        fee: Some(fee),
        ..Default::default()
    })
}

pub fn update_auth_info_fee(mut auth_info: AuthInfo, fee: Fee) -> AuthInfo {
    auth_info.fee = Some(fee);
    auth_info
}

pub fn generate_sign_doc(
    body: &TxBody,
    auth_info: &AuthInfo,
    chain_id: &str,
    account_number: u64,
) -> SignDoc {
    SignDoc {
        body_bytes: body.encode_to_vec(),
        auth_info_bytes: auth_info.encode_to_vec(),
        chain_id: chain_id.into(),
        account_number,
    }
}

/// Signs in direct mode. The returned `TxRaw` carries exactly the body and
/// auth info bytes that went into the sign doc.
pub fn sign_transaction(
    body: &TxBody,
    auth_info: &AuthInfo,
    chain_id: &str,
    account_number: u64,
    priv_key: &PrivateKey,
) -> TxRaw {
    let sign_doc = generate_sign_doc(body, auth_info, chain_id, account_number);
    let signature = priv_key.sign(&sign_doc.encode_to_vec());

    TxRaw {
        body_bytes: sign_doc.body_bytes,
        auth_info_bytes: sign_doc.auth_info_bytes,
        signatures: vec![signature.to_vec()],
    }
}
