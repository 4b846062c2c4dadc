//! Schema catalog for the telephony resource types.
//!
//! Domain data, not algorithm: one schema per resource type found
//! directly under a group, describing which sub-resources the service
//! exposes and which of them carry configuration worth keeping.

use super::SchemaNode;

/// All backed-up resource types with their schemas, in backup order.
pub fn resource_types() -> Vec<(&'static str, SchemaNode)> {
    vec![
        ("abbreviatedNumber", abbreviated_number()),
        ("easyHunting", easy_hunting()),
        ("easyPabx", easy_pabx()),
        ("fax", fax()),
        ("line", line()),
        ("miniPabx", mini_pabx()),
        ("number", number()),
        ("ovhPabx", ovh_pabx()),
        ("phonebook", phonebook()),
        ("redirect", redirect()),
        ("scheduler", scheduler()),
        ("screen", screen()),
        ("service", service()),
        ("timeCondition", time_condition()),
    ]
}

fn abbreviated_number() -> SchemaNode {
    SchemaNode::saved()
}

fn easy_hunting() -> SchemaNode {
    SchemaNode::saved()
        .child(
            "timeConditions",
            SchemaNode::saved().list("conditions", SchemaNode::saved()),
        )
        .child(
            "screenListConditions",
            SchemaNode::saved().list("conditions", SchemaNode::saved()),
        )
        .child(
            "hunting",
            SchemaNode::saved()
                .list(
                    "agent",
                    SchemaNode::saved().list("queue", SchemaNode::saved()),
                )
                .list(
                    "queue",
                    SchemaNode::saved().list("agent", SchemaNode::saved()),
                ),
        )
        .list("sound", SchemaNode::saved())
}

fn easy_pabx() -> SchemaNode {
    SchemaNode::saved().child(
        "hunting",
        SchemaNode::saved()
            .child("tones", SchemaNode::saved())
            .list("agent", SchemaNode::saved()),
    )
}

fn fax() -> SchemaNode {
    SchemaNode::saved().child("settings", SchemaNode::saved())
}

fn line() -> SchemaNode {
    SchemaNode::saved()
        .child("options", SchemaNode::saved())
        .child(
            "phone",
            SchemaNode::saved()
                .list("functionKey", SchemaNode::saved())
                .list("phonebook", SchemaNode::saved()),
        )
        .list("abbreviatedNumber", SchemaNode::saved())
}

fn mini_pabx() -> SchemaNode {
    SchemaNode::saved()
        .child(
            "hunting",
            SchemaNode::saved().list("agent", SchemaNode::saved()),
        )
        .child("tones", SchemaNode::saved())
}

fn number() -> SchemaNode {
    SchemaNode::saved()
}

fn ovh_pabx() -> SchemaNode {
    SchemaNode::saved()
        .child(
            "hunting",
            SchemaNode::saved()
                .list(
                    "agent",
                    SchemaNode::saved().list("queue", SchemaNode::saved()),
                )
                .list(
                    "queue",
                    SchemaNode::saved().list("agent", SchemaNode::saved()),
                ),
        )
        .list("sound", SchemaNode::saved())
        .list("tts", SchemaNode::saved())
        .list(
            "menu",
            SchemaNode::saved().list("entry", SchemaNode::saved()),
        )
        .list(
            "dialplan",
            SchemaNode::saved().list(
                "extension",
                SchemaNode::saved()
                    .list("conditionScreenList", SchemaNode::saved())
                    .list("conditionTime", SchemaNode::saved())
                    .list("rule", SchemaNode::saved()),
            ),
        )
}

fn phonebook() -> SchemaNode {
    SchemaNode::saved().list("phonebookContact", SchemaNode::saved())
}

fn redirect() -> SchemaNode {
    SchemaNode::saved()
}

fn scheduler() -> SchemaNode {
    SchemaNode::saved()
}

fn screen() -> SchemaNode {
    SchemaNode::saved().list("screenLists", SchemaNode::saved())
}

fn service() -> SchemaNode {
    SchemaNode::saved().child("directory", SchemaNode::saved())
}

fn time_condition() -> SchemaNode {
    SchemaNode::saved()
        .child("options", SchemaNode::saved())
        .list("condition", SchemaNode::saved())
}
