mod args;
mod logging;
mod op;
mod ops;
mod prompt;
mod render;
mod settings;
mod state;

use args::{Args, Parser};
use op::{Op, OpContext};
use ops::{Commands, Init, Profile, Room, Tagging, Version};

command_enum! {
    (Room, Room),
    (Profile, Profile),
    (Tag, Tagging),
    (Commands, Commands),
    (Init, Init),
    (Version, Version),
}

#[tokio::main]
async fn main() {
    // .env values feed the ROOMCTL_* fallbacks of the global flags
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    let guard = logging::init(args.log_level);

    let code = match OpContext::try_from(&args) {
        Ok(ctx) => match args.command.execute(&ctx).await {
            Ok(output) => {
                let output = output.to_string();
                if !output.is_empty() {
                    println!("{}", output);
                }
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    // flush buffered log lines before exiting
    drop(guard);
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use common::prelude::{Decline, Force};
    use service::testkit::StubTransport;

    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    fn stub_ctx(args: &Args, stub: Arc<StubTransport>) -> OpContext {
        let settings = settings::Settings::resolve(&args.connection, &Default::default());
        let options = service::OutputOptions {
            select: args.output.select.clone(),
            pass_thru: args.output.pass_thru,
            force: args.output.force,
        };
        OpContext::new(settings, options, args.output.output).with_transport(stub)
    }

    #[tokio::test]
    async fn test_room_new_prints_arn() {
        let args = parse(&["roomctl", "--force", "room", "new", "--room-name", "Lab1"]);
        let stub = Arc::new(StubTransport::returning(json!({ "RoomArn": "arn:x" })));

        let output = args
            .command
            .execute(&stub_ctx(&args, stub.clone()))
            .await
            .unwrap();
        assert_eq!(output.to_string(), "\"arn:x\"");
        assert_eq!(stub.last_body(), Some(json!({ "RoomName": "Lab1" })));
    }

    #[tokio::test]
    async fn test_text_output_and_alias() {
        let args = parse(&[
            "roomctl",
            "profile",
            "get",
            "--profile",
            "arn:p",
            "--output",
            "text",
        ]);
        let stub = Arc::new(StubTransport::returning(json!({
            "Profile": { "ProfileArn": "arn:p", "ProfileName": "Standard" }
        })));

        let output = args
            .command
            .execute(&stub_ctx(&args, stub.clone()))
            .await
            .unwrap();
        assert_eq!(
            output.to_string(),
            "ProfileArn  : arn:p\nProfileName : Standard"
        );
        assert_eq!(stub.calls()[0].target, "RoomService.GetProfile");
    }

    #[tokio::test]
    async fn test_pass_thru_after_subcommand() {
        let args = parse(&[
            "roomctl",
            "tag",
            "add",
            "--arn",
            "arn:x",
            "--tag",
            "floor=3",
            "--pass-thru",
            "-f",
        ]);
        let stub = Arc::new(StubTransport::returning(json!({})));

        let output = args
            .command
            .execute(&stub_ctx(&args, stub.clone()))
            .await
            .unwrap();
        assert_eq!(output.to_string(), "\"arn:x\"");
        assert_eq!(
            stub.last_body(),
            Some(json!({ "Arn": "arn:x", "Tags": [{ "Key": "floor", "Value": "3" }] }))
        );
    }

    #[tokio::test]
    async fn test_declined_removal_prints_nothing() {
        let args = parse(&["roomctl", "room", "remove", "--room-arn", "arn:x"]);
        let stub = Arc::new(StubTransport::returning(json!({})));
        let ctx = stub_ctx(&args, stub.clone()).with_confirm(Arc::new(Decline));

        let output = args.command.execute(&ctx).await.unwrap();
        assert_eq!(output.to_string(), "");
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_confirmed_removal_is_sent() {
        let args = parse(&["roomctl", "room", "remove", "--room-arn", "arn:x"]);
        let stub = Arc::new(StubTransport::returning(json!({})));
        let ctx = stub_ctx(&args, stub.clone()).with_confirm(Arc::new(Force));

        args.command.execute(&ctx).await.unwrap();
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_service_error_is_an_error() {
        let args = parse(&["roomctl", "room", "get", "--room-arn", "arn:x"]);
        let stub = Arc::new(StubTransport::failing(404, "NotFoundException", "gone"));

        let err = args
            .command
            .execute(&stub_ctx(&args, stub))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "NotFoundException: gone (HTTP 404)");
    }

    #[tokio::test]
    async fn test_conflicting_output_options() {
        let args = parse(&[
            "roomctl",
            "--select",
            "RoomArn",
            "--pass-thru",
            "-f",
            "room",
            "new",
            "--name",
            "Lab1",
        ]);
        let stub = Arc::new(StubTransport::returning(json!({})));

        let err = args
            .command
            .execute(&stub_ctx(&args, stub.clone()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("cannot be used together"));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_nested_profile_flags() {
        let args = parse(&[
            "roomctl",
            "-f",
            "profile",
            "new",
            "--profile-name",
            "Standard",
            "--distance-unit",
            "metric",
            "--end-of-meeting-reminder-at-minute",
            "5,10",
        ]);
        let stub = Arc::new(StubTransport::returning(json!({ "ProfileArn": "arn:p" })));

        args.command
            .execute(&stub_ctx(&args, stub.clone()))
            .await
            .unwrap();
        assert_eq!(
            stub.last_body(),
            Some(json!({
                "ProfileName": "Standard",
                "DistanceUnit": "METRIC",
                "MeetingRoomConfiguration": {
                    "EndOfMeetingReminder": { "ReminderAtMinutes": [5, 10] }
                }
            }))
        );
    }

    #[test]
    fn test_search_flags_parse() {
        let args = parse(&[
            "roomctl",
            "room",
            "find",
            "--filter",
            "RoomName=Lab1,Lab2",
            "--sort-criterion",
            "RoomName=desc",
            "--max-result",
            "5",
        ]);
        assert!(matches!(args.command, Command::Room(_)));
    }
}
