use crate::BuiltDocument;
use crate::DocumentBuilder;
use crate::messages::MessageCollection;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;

/// The "pets" schema used by the validation examples throughout section 5
/// of the GraphQL spec, plus a few additions for argument and input-object
/// tests.
pub(crate) const PETS_SCHEMA: &str = r#"
    type Query {
        dog: Dog
        pet: Pet
        catOrDog: CatOrDog
        human(id: ID!): Human
        findDog(searchBy: FindDogInput): Dog
        booleanList(booleanListArg: [Boolean!]): Boolean
        nonNullBoolean(flag: Boolean!): Boolean
        optionalBoolean(flag: Boolean! = false): Boolean
        intArg(value: Int): Int
    }

    type Subscription {
        newMessage: Message
        disallowedSecondRootField: Boolean
    }

    type Message {
        body: String
        sender: String
    }

    enum DogCommand { SIT, DOWN, HEEL }

    interface Pet {
        id: ID!
        name: String!
    }

    type Dog implements Pet {
        id: ID!
        name: String!
        nickname: String
        barkVolume: Int
        doesKnowCommand(dogCommand: DogCommand!): Boolean!
        isHouseTrained(atOtherHomes: Boolean): Boolean!
        owner: Human
    }

    type Cat implements Pet {
        id: ID!
        name: String!
        nickname: String
        meowVolume: Int
        flavor: String
    }

    union CatOrDog = Cat | Dog

    type Human {
        name: String!
        pets: [Pet!]!
    }

    input FindDogInput {
        name: String
        owner: String
        breed: String!
    }

    directive @tag(name: String!) repeatable on FIELD
    directive @once on FIELD | QUERY
"#;

pub(crate) fn pets_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, PETS_SCHEMA)
        .expect("pets schema parses")
        .build()
        .expect("pets schema builds")
}

pub(crate) fn build<'schema>(schema: &'schema Schema, doc: &str) -> BuiltDocument<'schema> {
    DocumentBuilder::new(schema)
        .build_from_str(doc, None)
        .expect("document parses")
}

/// The codes of every message, in order.
pub(crate) fn codes(messages: &MessageCollection) -> Vec<&'static str> {
    messages.iter().map(|msg| msg.code()).collect()
}
