//! Solidity interfaces the swapper reads from or calls into.

use alloy_sol_types::sol;

sol! {
    /// Read side of the MIM token.
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256 balance);
    }

    /// Swapper contract deployed at `execAddress`.
    interface ISpellSwapper {
        function swapMimForSpell1Inch(address router, bytes data) external;
    }
}
