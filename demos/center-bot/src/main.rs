use starbot::prelude::*;

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Sends every ship to the middle of the map and fires at it.
struct CenterOfGalaxy;

const CENTER: Vector = Vector::new(15, 15, 15);

impl Strategy for CenterOfGalaxy {
    fn battle(&mut self, state: &BattleState) -> BattleOutput {
        let mut output = BattleOutput::new(format!(
            "I have {} ships and move to center of galaxy",
            state.my.len()
        ));

        for ship in &state.my {
            output.push(UserCommand::move_to(ship.id, CENTER));
            if let Some(gun) = ship.first_gun() {
                output.push(UserCommand::attack(ship.id, gun.name.clone(), CENTER));
            }
        }
        output
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = BotConfig::default();
    starbot::logging::init(&config);

    let mut bot = BotBuilder::new().config(config).build(CenterOfGalaxy);
    if let Err(e) = bot.run().await {
        tracing::error!(kind = %e.kind(), error = %e, "bot stopped");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::io::Cursor;

    async fn play(input: &str) -> (Result<LoopSummary, BotError>, Vec<Value>) {
        let conn = LineConnection::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut bot = BotBuilder::new().build_on(conn, CenterOfGalaxy);
        let result = bot.run().await;

        let (conn, _) = bot.into_parts();
        let (_, written) = conn.into_inner();
        let lines: Vec<Value> = String::from_utf8(written)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (result, lines)
    }

    const ONE_ARMED_SHIP: &str = concat!(
        r#"{"FireInfos":[],"My":[{"Id":1,"Position":"0/0/0","Velocity":"0/0/0","Energy":5,"Health":100,"#,
        r#""Equipment":[{"Type":"Gun","Name":"g1","Damage":5,"EnergyPrice":1,"Radius":1,"EffectType":"Blaster"}]}],"#,
        r#""Opponent":[]}"#,
    );

    #[tokio::test]
    async fn test_moves_and_fires_at_center() {
        let (result, lines) = play(&format!("{{}}\n{ONE_ARMED_SHIP}\n")).await;
        assert_eq!(result.unwrap().turns, 1);
        assert_eq!(
            lines,
            [
                json!({}),
                json!({
                    "Message": "I have 1 ships and move to center of galaxy",
                    "UserCommands": [
                        {"Command": "MOVE", "Parameters": {"Id": 1, "Target": "15/15/15"}},
                        {"Command": "ATTACK", "Parameters": {"Id": 1, "Name": "g1", "Target": "15/15/15"}},
                    ],
                }),
            ]
        );
    }

    #[tokio::test]
    async fn test_unarmed_ship_only_moves() {
        let state = ONE_ARMED_SHIP.replace(
            r#"{"Type":"Gun","Name":"g1","Damage":5,"EnergyPrice":1,"Radius":1,"EffectType":"Blaster"}"#,
            r#"{"Type":"Engine","Name":"drive","MaxAccelerate":2}"#,
        );
        let (result, lines) = play(&format!("{{}}\n{state}\n")).await;
        result.unwrap();

        let commands = lines[1]["UserCommands"].as_array().unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0]["Command"], "MOVE");
    }

    #[tokio::test]
    async fn test_no_ships_sends_message_only() {
        let (result, lines) = play("{}\n{\"FireInfos\":[],\"My\":[],\"Opponent\":[]}\n").await;
        result.unwrap();
        assert_eq!(
            lines[1],
            json!({"Message": "I have 0 ships and move to center of galaxy", "UserCommands": []})
        );
    }

    #[tokio::test]
    async fn test_closed_input_exits_cleanly() {
        let (result, lines) = play("").await;
        assert_eq!(result.unwrap().turns, 0);
        assert!(lines.is_empty());
    }
}
