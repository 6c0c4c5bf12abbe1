//! Programming concepts: OOP, SOLID, design patterns, paradigms, principles

use super::types::{Concept, ConceptGroups};

const fn concept(name: &'static str, description: &'static str) -> Concept {
    Concept { name, description }
}

static OOP: &[Concept] = &[
    concept("Encapsulation", "Bundle data with the methods that operate on it and hide internal state."),
    concept("Abstraction", "Expose essential behaviour while hiding implementation detail."),
    concept("Inheritance", "Derive a new type from an existing one, reusing and extending its behaviour."),
    concept("Polymorphism", "Treat values of different types through a common interface."),
];

static SOLID: &[Concept] = &[
    concept("Single Responsibility", "A module should have one, and only one, reason to change."),
    concept("Open/Closed", "Open for extension, closed for modification."),
    concept("Liskov Substitution", "Subtypes must be usable wherever their base type is expected."),
    concept("Interface Segregation", "Prefer many small, client-specific interfaces over one general one."),
    concept("Dependency Inversion", "Depend on abstractions, not on concrete implementations."),
];

static DESIGN: &[Concept] = &[
    concept("Creational", "Control object creation: Factory, Abstract Factory, Builder, Prototype, Singleton."),
    concept("Structural", "Compose types into larger structures: Adapter, Bridge, Composite, Decorator, Facade, Proxy."),
    concept("Behavioral", "Assign responsibilities between objects: Observer, Strategy, Command, Iterator, State."),
];

static PARADIGMS: &[Concept] = &[
    concept("Imperative", "Describe how to compute through statements that change program state."),
    concept("Declarative", "Describe what to compute and leave the control flow to the runtime."),
    concept("Procedural", "Organise imperative code into reusable procedures."),
    concept("Object-Oriented", "Model programs as interacting objects that combine state and behaviour."),
    concept("Functional", "Build programs from pure functions and immutable values."),
];

static PRINCIPLES: &[Concept] = &[
    concept("DRY", "Don't Repeat Yourself: every piece of knowledge has a single representation."),
    concept("KISS", "Keep It Simple, Stupid: prefer the simplest design that works."),
    concept("YAGNI", "You Aren't Gonna Need It: don't build features before they are required."),
    concept("Separation of Concerns", "Split a program into sections that each address one concern."),
    concept("Composition over Inheritance", "Reuse behaviour by composing objects rather than extending classes."),
];

pub fn concepts() -> ConceptGroups {
    ConceptGroups {
        oop: OOP,
        solid: SOLID,
        design: DESIGN,
        paradigms: PARADIGMS,
        principles: PRINCIPLES,
    }
}
