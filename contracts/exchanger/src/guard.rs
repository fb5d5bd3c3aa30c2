use coin_exchanger_base::error::exchanger::{ContractError, ContractResult};
use cosmwasm_std::{ensure_eq, Addr};

/// Single-owner check. Called before any administrative handler touches state.
pub fn assert_owner(sender: &Addr, owner: &Addr) -> ContractResult<()> {
    ensure_eq!(sender, owner, ContractError::NotOwner {});
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_passes() {
        assert_owner(&Addr::unchecked("owner"), &Addr::unchecked("owner")).unwrap();
    }

    #[test]
    fn stranger_is_rejected() {
        let err =
            assert_owner(&Addr::unchecked("stranger"), &Addr::unchecked("owner")).unwrap_err();
        assert_eq!(err, ContractError::NotOwner {});
        assert_eq!(err.code(), 101);
    }
}
