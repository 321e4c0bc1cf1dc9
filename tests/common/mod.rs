#![allow(dead_code)]

use ddragon_browser::TomlConfig;
use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{json, Value};

pub const VERSION: &str = "14.1.1";

pub fn realms_body() -> Value {
    json!({
        "n": { "item": VERSION, "champion": "14.1.0", "language": "7.20.1" },
        "v": VERSION,
        "l": "pt_BR",
        "cdn": "https://ddragon.leagueoflegends.com/cdn"
    })
}

pub fn items_body() -> Value {
    json!({
        "type": "item",
        "version": VERSION,
        "data": {
            "3031": {
                "name": "Gume do Infinito",
                "description": "<mainText><stats>+65 Dano de Ataque</stats></mainText>",
                "plaintext": "Aumenta muito o dano crítico",
                "gold": { "base": 625, "total": 3400, "sell": 2380 },
                "image": { "full": "3031.png" },
                "maps": { "11": true, "12": false }
            },
            "1001": {
                "name": "Botas",
                "description": "<mainText>Velocidade de Movimento</mainText>",
                "plaintext": "",
                "gold": { "total": 300 },
                "image": { "full": "1001.png" },
                "maps": { "11": true, "12": true }
            },
            "2003": {
                "name": "Poção de Vida",
                "description": "Cura ao longo do tempo",
                "gold": { "total": 50 },
                "image": { "full": "2003.png" },
                "maps": { "11": true }
            },
            "3400": {
                "name": "Sua Parte dos Espólios",
                "description": "Sem custo",
                "gold": { "total": 0 },
                "image": { "full": "3400.png" },
                "maps": { "11": true }
            },
            "7050": {
                "name": "Gume do Infinito",
                "description": "Cópia de evento",
                "gold": { "total": 3400 },
                "image": { "full": "7050.png" },
                "maps": { "11": true }
            },
            "3907": {
                "name": "Aro de Ferro",
                "description": "Só no Abismo",
                "gold": { "total": 900 },
                "image": { "full": "3907.png" },
                "maps": { "12": true }
            },
            "9999": {
                "name": "Relíquia da Arena",
                "maps": { "30": true }
            }
        }
    })
}

fn champion_entry(id: &str, name: &str, title: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "key": "0",
        "name": name,
        "title": title,
        "tags": tags,
        "image": { "full": format!("{}.png", id) }
    })
}

pub fn champions_body() -> Value {
    json!({
        "type": "champion",
        "version": VERSION,
        "data": {
            "Lux": champion_entry("Lux", "Lux", "a Dama da Luz", &["Mage", "Support"]),
            "Garen": champion_entry("Garen", "Garen", "o Poder de Demacia", &["Fighter", "Tank"]),
            "Zed": champion_entry("Zed", "Zed", "o Mestre das Sombras", &["Assassin"])
        }
    })
}

pub fn garen_detail_body() -> Value {
    let mut entry = champion_entry("Garen", "Garen", "o Poder de Demacia", &["Fighter", "Tank"]);
    entry["lore"] = json!("Um guerreiro orgulhoso e nobre.");
    entry["info"] = json!({ "attack": 7, "defense": 7, "magic": 1, "difficulty": 5 });
    entry["allytips"] = json!(["Use Julgamento contra inimigos agrupados."]);
    json!({ "type": "champion", "version": VERSION, "data": { "Garen": entry } })
}

pub fn data_path(file: &str) -> String {
    format!("/cdn/{}/data/pt_BR/{}", VERSION, file)
}

pub fn config_for(server: &MockServer, output_path: &str) -> TomlConfig {
    let document = format!(
        r#"
[source]
realms_url = "{}"
cdn_base_url = "{}"
locale = "pt_BR"

[load]
output_path = "{}"
"#,
        server.url("/realms/br.json"),
        server.url("/cdn/"),
        output_path.replace('\\', "/")
    );
    TomlConfig::from_toml_str(&document).unwrap()
}

pub struct Mocks<'a> {
    pub realms: Mock<'a>,
    pub items: Mock<'a>,
    pub champions: Mock<'a>,
    pub garen: Mock<'a>,
}

pub fn mock_service(server: &MockServer) -> Mocks<'_> {
    Mocks {
        realms: server.mock(|when, then| {
            when.method(GET).path("/realms/br.json");
            then.status(200).json_body(realms_body());
        }),
        items: server.mock(|when, then| {
            when.method(GET).path(data_path("item.json"));
            then.status(200).json_body(items_body());
        }),
        champions: server.mock(|when, then| {
            when.method(GET).path(data_path("champion.json"));
            then.status(200).json_body(champions_body());
        }),
        garen: server.mock(|when, then| {
            when.method(GET).path(data_path("champion/Garen.json"));
            then.status(200).json_body(garen_detail_body());
        }),
    }
}
