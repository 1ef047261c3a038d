use cosmos_sdk_proto::cosmos::base::v1beta1::Coin;
use cosmos_sdk_proto::Any;
use prost::Name;

use crate::Result;

pub const TOKENFACTORY_PACKAGE: &str = "injective.tokenfactory.v1beta1";

/// Mints `amount` of a token-factory denom to `receiver`. Only the denom
/// admin may send it.
#[derive(Clone, PartialEq, prost::Message)]
pub struct MsgMint {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(message, optional, tag = "2")]
    pub amount: Option<Coin>,
    #[prost(string, tag = "3")]
    pub receiver: String,
}

impl Name for MsgMint {
    const NAME: &'static str = "MsgMint";
    const PACKAGE: &'static str = TOKENFACTORY_PACKAGE;
}

/// Reassigns adminship of a token-factory denom.
#[derive(Clone, PartialEq, prost::Message)]
pub struct MsgChangeAdmin {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(string, tag = "2")]
    pub denom: String,
    #[prost(string, tag = "3")]
    pub new_admin: String,
}

impl Name for MsgChangeAdmin {
    const NAME: &'static str = "MsgChangeAdmin";
    const PACKAGE: &'static str = TOKENFACTORY_PACKAGE;
}

pub fn coin(amount: u128, denom: &str) -> Coin {
    Coin {
        denom: denom.into(),
        amount: amount.to_string(),
    }
}

pub fn mint(sender: &str, amount: u128, denom: &str, receiver: &str) -> MsgMint {
    MsgMint {
        sender: sender.into(),
        amount: Some(coin(amount, denom)),
        receiver: receiver.into(),
    }
}

pub fn change_admin(sender: &str, denom: &str, new_admin: &str) -> MsgChangeAdmin {
    MsgChangeAdmin {
        sender: sender.into(),
        denom: denom.into(),
        new_admin: new_admin.into(),
    }
}

/// The single message one procedure run sends.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenFactoryMsg {
    Mint(MsgMint),
    ChangeAdmin(MsgChangeAdmin),
}

impl TokenFactoryMsg {
    pub fn sender(&self) -> &str {
        match self {
            Self::Mint(msg) => &msg.sender,
            Self::ChangeAdmin(msg) => &msg.sender,
        }
    }

    pub fn to_any(&self) -> Result<Any> {
        match self {
            Self::Mint(msg) => pack(msg),
            Self::ChangeAdmin(msg) => pack(msg),
        }
    }
}

pub fn pack<M>(msg: &M) -> Result<Any>
where
    M: Name,
{
    Ok(Any::from_msg(msg)?)
}
