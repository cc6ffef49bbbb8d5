use soroban_sdk::contractevent;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerUpdatedEvent {
    #[topic]
    pub round_id: u64,
    pub answer: i128,
    pub updated_at: u64,
}
