//! REST and GraphQL notes

use super::types::{GraphQlOperation, RestConstraint, RestMethod};

static REST_CONSTRAINTS: &[RestConstraint] = &[
    RestConstraint {
        name: "Client-Server",
        description: "User interface concerns are separated from data storage concerns.",
    },
    RestConstraint {
        name: "Stateless",
        description: "Each request carries all information needed to serve it.",
    },
    RestConstraint {
        name: "Cacheable",
        description: "Responses label themselves as cacheable or not.",
    },
    RestConstraint {
        name: "Uniform Interface",
        description: "Resources are identified by URIs and manipulated through representations.",
    },
    RestConstraint {
        name: "Layered System",
        description: "A client cannot tell whether it talks to the end server or an intermediary.",
    },
    RestConstraint {
        name: "Code on Demand",
        description: "Optionally, servers may extend clients by sending executable code.",
    },
];

static REST_METHODS: &[RestMethod] = &[
    RestMethod {
        method: "GET",
        crud: "Read",
    },
    RestMethod {
        method: "POST",
        crud: "Create",
    },
    RestMethod {
        method: "PUT",
        crud: "Update/Replace",
    },
    RestMethod {
        method: "PATCH",
        crud: "Update/Modify",
    },
    RestMethod {
        method: "DELETE",
        crud: "Delete",
    },
];

static GRAPHQL_CONCEPTS: &[GraphQlOperation] = &[
    GraphQlOperation {
        operation: "Query",
        description: "Read data; the client selects exactly the fields it needs.",
    },
    GraphQlOperation {
        operation: "Mutation",
        description: "Write data and return the updated fields.",
    },
    GraphQlOperation {
        operation: "Subscription",
        description: "Receive pushed updates when server-side data changes.",
    },
    GraphQlOperation {
        operation: "Schema",
        description: "Strongly typed description of every type and field the API exposes.",
    },
    GraphQlOperation {
        operation: "Resolver",
        description: "Function that produces the value of a single field.",
    },
];

pub fn rest_constraints() -> &'static [RestConstraint] {
    REST_CONSTRAINTS
}

pub fn rest_methods() -> &'static [RestMethod] {
    REST_METHODS
}

pub fn graphql_concepts() -> &'static [GraphQlOperation] {
    GRAPHQL_CONCEPTS
}
