use clap::Args;

use service::api::tag::{TagResource, UntagResource};

use crate::op::Op;

crate::command_enum! {
    (Add, TagResource),
    (Remove, UntagResource),
}

crate::adapter_ops!(TagResource, UntagResource);

pub type TagCommand = Command;

/// Add or remove tags on any resource
#[derive(Args, Debug, Clone)]
pub struct Tagging {
    #[command(subcommand)]
    pub command: TagCommand,
}

#[async_trait::async_trait]
impl Op for Tagging {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
