/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Closure clusters.

clusters! {
    DoorLock = 0x0101 {
        attributes {
            0x0000 => LockState,
            0x0001 => LockType,
            0x0002 => ActuatorEnabled,
            0x0003 => DoorState,
            0x0004 => DoorOpenEvents,
            0x0005 => DoorClosedEvents,
            0x0006 => OpenPeriod,
            0x0011 => NumberOfTotalUsersSupported,
            0x0012 => NumberOfPINUsersSupported,
            0x0013 => NumberOfRFIDUsersSupported,
            0x0014 => NumberOfWeekDaySchedulesSupportedPerUser,
            0x0015 => NumberOfYearDaySchedulesSupportedPerUser,
            0x0016 => NumberOfHolidaySchedulesSupported,
            0x0017 => MaxPINCodeLength,
            0x0018 => MinPINCodeLength,
            0x0019 => MaxRFIDCodeLength,
            0x001A => MinRFIDCodeLength,
            0x001B => CredentialRulesSupport,
            0x001C => NumberOfCredentialsSupportedPerUser,
            0x0021 => Language,
            0x0022 => LEDSettings,
            0x0023 => AutoRelockTime,
            0x0024 => SoundVolume,
            0x0025 => OperatingMode,
            0x0026 => SupportedOperatingModes,
            0x0027 => DefaultConfigurationRegister,
            0x0028 => EnableLocalProgramming,
            0x0029 => EnableOneTouchLocking,
            0x002A => EnableInsideStatusLED,
            0x002B => EnablePrivacyModeButton,
            0x002C => LocalProgrammingFeatures,
            0x0030 => WrongCodeEntryLimit,
            0x0031 => UserCodeTemporaryDisableTime,
            0x0032 => SendPINOverTheAir,
            0x0033 => RequirePINforRemoteOperation,
            0x0035 => ExpiringUserTimeout,
        }
        events {
            0x00 => DoorLockAlarm,
            0x01 => DoorStateChange,
            0x02 => LockOperation,
            0x03 => LockOperationError,
            0x04 => LockUserChange,
        }
        commands {
            0x00 => LockDoor,
            0x01 => UnlockDoor,
            0x03 => UnlockWithTimeout,
            0x0B => SetWeekDaySchedule,
            0x0C => GetWeekDaySchedule,
            0x0D => ClearWeekDaySchedule,
            0x0E => SetYearDaySchedule,
            0x0F => GetYearDaySchedule,
            0x10 => ClearYearDaySchedule,
            0x11 => SetHolidaySchedule,
            0x12 => GetHolidaySchedule,
            0x13 => ClearHolidaySchedule,
            0x1A => SetUser,
            0x1B => GetUser,
            0x1D => ClearUser,
            0x22 => SetCredential,
            0x24 => GetCredentialStatus,
            0x26 => ClearCredential,
            0x27 => UnboltDoor,
        }
    }

    WindowCovering = 0x0102 {
        attributes {
            0x0000 => Type,
            0x0001 => PhysicalClosedLimitLift,
            0x0002 => PhysicalClosedLimitTilt,
            0x0003 => CurrentPositionLift,
            0x0004 => CurrentPositionTilt,
            0x0005 => NumberOfActuationsLift,
            0x0006 => NumberOfActuationsTilt,
            0x0007 => ConfigStatus,
            0x0008 => CurrentPositionLiftPercentage,
            0x0009 => CurrentPositionTiltPercentage,
            0x000A => OperationalStatus,
            0x000B => TargetPositionLiftPercent100ths,
            0x000C => TargetPositionTiltPercent100ths,
            0x000D => EndProductType,
            0x000E => CurrentPositionLiftPercent100ths,
            0x000F => CurrentPositionTiltPercent100ths,
            0x0010 => InstalledOpenLimitLift,
            0x0011 => InstalledClosedLimitLift,
            0x0012 => InstalledOpenLimitTilt,
            0x0013 => InstalledClosedLimitTilt,
            0x0017 => Mode,
            0x001A => SafetyStatus,
        }
        events {}
        commands {
            0x00 => UpOrOpen,
            0x01 => DownOrClose,
            0x02 => StopMotion,
            0x04 => GoToLiftValue,
            0x05 => GoToLiftPercentage,
            0x07 => GoToTiltValue,
            0x08 => GoToTiltPercentage,
        }
    }

    BarrierControl = 0x0103 {
        attributes {
            0x0001 => BarrierMovingState,
            0x0002 => BarrierSafetyStatus,
            0x0003 => BarrierCapabilities,
            0x0004 => BarrierOpenEvents,
            0x0005 => BarrierCloseEvents,
            0x0006 => BarrierCommandOpenEvents,
            0x0007 => BarrierCommandCloseEvents,
            0x0008 => BarrierOpenPeriod,
            0x0009 => BarrierClosePeriod,
            0x000A => BarrierPosition,
        }
        events {}
        commands {
            0x00 => BarrierControlGoToPercent,
            0x01 => BarrierControlStop,
        }
    }
}
