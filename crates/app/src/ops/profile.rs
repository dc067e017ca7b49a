use clap::Args;

use service::api::profile::{CreateProfile, DeleteProfile, GetProfile};

use crate::op::Op;

crate::command_enum! {
    (New, CreateProfile),
    (Get, GetProfile),
    (Remove, DeleteProfile),
}

crate::adapter_ops!(CreateProfile, GetProfile, DeleteProfile);

pub type ProfileCommand = Command;

/// Manage room profiles
#[derive(Args, Debug, Clone)]
pub struct Profile {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[async_trait::async_trait]
impl Op for Profile {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
